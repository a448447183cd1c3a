//! Triangle from three side lengths.
//!
//! - Construction enforces the strict triangle inequality; an invalid triple
//!   never becomes a `Triangle`.
//! - Area by Heron's formula; right-angle test with a relative tolerance.

use nalgebra::Vector2;

use crate::cfg::{is_close, REL_TOL};
use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::registry::RegisteredShape;
use crate::shape::Shape;

/// Triangle with side lengths `a, b, c`.
///
/// Fields are private: every value went through `Triangle::new`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Pre: none. Post: `a+b>c`, `a+c>b`, `b+c>a` hold on the result.
    ///
    /// NaN sides fail every comparison and are rejected.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ShapeError> {
        if !(a + b > c && a + c > b && b + c > a) {
            return Err(ShapeError::InvalidTriangle { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Triangle with vertices `p, q, r`; side lengths are the pairwise distances.
    pub fn from_points(
        p: Vector2<f64>,
        q: Vector2<f64>,
        r: Vector2<f64>,
    ) -> Result<Self, ShapeError> {
        Self::new((q - p).norm(), (r - q).norm(), (p - r).norm())
    }

    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Right angle test with the default `REL_TOL`.
    #[inline]
    pub fn is_right(&self) -> bool {
        self.is_right_with_tol(REL_TOL)
    }

    /// `x² + y² ≈ z²` for the sorted sides `x <= y <= z`.
    ///
    /// Compared as `(x/z)² + (y/z)² ≈ 1` so huge sides do not overflow.
    pub fn is_right_with_tol(&self, rel_tol: f64) -> bool {
        let [x, y, z] = self.sorted_sides();
        let (u, v) = (x / z, y / z);
        is_close(u * u + v * v, 1.0, rel_tol)
    }

    /// Sides ascending; the last one is positive for any valid triangle.
    #[inline]
    fn sorted_sides(&self) -> [f64; 3] {
        let mut s = self.sides();
        s.sort_by(f64::total_cmp);
        s
    }
}

impl Shape for Triangle {
    /// Heron on the sides scaled by the longest one, `z · (z · heron(a/z, b/z, c/z))`,
    /// so the product stays finite whenever the area itself is.
    fn area(&self) -> f64 {
        let z = self.sorted_sides()[2];
        let (a, b, c) = (self.a / z, self.b / z, self.c / z);
        let s = (a + b + c) / 2.0;
        // rounding can push a near-degenerate radicand slightly negative
        let unit = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
        z * (z * unit)
    }

    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }
}

impl RegisteredShape for Triangle {
    const KIND: ShapeKind = ShapeKind::Triangle;
    const ARITY: usize = 3;

    fn from_args(args: &[f64]) -> Result<Self, ShapeError> {
        match *args {
            [a, b, c] => Triangle::new(a, b, c),
            _ => Err(ShapeError::ArityMismatch {
                kind: Self::KIND,
                expected: Self::ARITY,
                got: args.len(),
            }),
        }
    }
}
