//! The `Shape` capability and the factory's return type.

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::kind::{KindArg, ShapeKind};
use crate::registry::Registry;
use crate::triangle::Triangle;

/// Anything with an area.
pub trait Shape {
    fn area(&self) -> f64;
    fn kind(&self) -> ShapeKind;
}

/// Closed sum of the shape variants; what the factory hands back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyShape {
    Circle(Circle),
    Triangle(Triangle),
}

impl AnyShape {
    /// Build a shape through the process-wide registry.
    ///
    /// `kind` is a `ShapeKind` or its canonical name. `args` go to the
    /// registered constructor unchanged; its validation errors propagate.
    pub fn create<'a>(kind: impl Into<KindArg<'a>>, args: &[f64]) -> Result<Self, ShapeError> {
        Registry::global().create(kind, args)
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyShape::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            AnyShape::Triangle(t) => Some(t),
            _ => None,
        }
    }
}

impl Shape for AnyShape {
    #[inline]
    fn area(&self) -> f64 {
        match self {
            AnyShape::Circle(c) => c.area(),
            AnyShape::Triangle(t) => t.area(),
        }
    }

    #[inline]
    fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Circle(c) => c.kind(),
            AnyShape::Triangle(t) => t.kind(),
        }
    }
}

impl From<Circle> for AnyShape {
    fn from(c: Circle) -> Self {
        AnyShape::Circle(c)
    }
}

impl From<Triangle> for AnyShape {
    fn from(t: Triangle) -> Self {
        AnyShape::Triangle(t)
    }
}
