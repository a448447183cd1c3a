use std::f64::consts::PI;

use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::registry::RegisteredShape;
use crate::shape::Shape;

/// Circle given by its radius.
///
/// The radius is stored as given; zero and negative values are accepted and
/// give `area() = π r²` all the same.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

impl RegisteredShape for Circle {
    const KIND: ShapeKind = ShapeKind::Circle;
    const ARITY: usize = 1;

    fn from_args(args: &[f64]) -> Result<Self, ShapeError> {
        match *args {
            [radius] => Ok(Circle::new(radius)),
            _ => Err(ShapeError::ArityMismatch {
                kind: Self::KIND,
                expected: Self::ARITY,
                got: args.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_two_is_four_pi() {
        let c = Circle::new(2.0);
        assert!((c.area() - 4.0 * PI).abs() < 1e-12);
        assert!((c.area() - 12.566).abs() < 1e-3);
    }

    #[test]
    fn zero_and_negative_radius_accepted() {
        assert_eq!(Circle::new(0.0).area(), 0.0);
        let neg = Circle::new(-3.0);
        assert_eq!(neg.radius, -3.0);
        assert!((neg.area() - 9.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn from_args_checks_arity() {
        assert_eq!(Circle::from_args(&[1.5]).unwrap(), Circle::new(1.5));
        assert!(matches!(
            Circle::from_args(&[]),
            Err(ShapeError::ArityMismatch { expected: 1, got: 0, .. })
        ));
    }
}
