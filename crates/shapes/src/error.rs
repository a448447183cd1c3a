use std::fmt;

use crate::kind::ShapeKind;

/// Errors surfaced by shape construction and the factory.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The string does not name any `ShapeKind`.
    InvalidShapeKind { name: String },
    /// The kind exists but the registry holds no constructor for it.
    UnregisteredShapeKind { kind: ShapeKind },
    /// Side lengths violate the strict triangle inequality.
    InvalidTriangle { a: f64, b: f64, c: f64 },
    /// Factory arguments do not match the constructor's arity.
    ArityMismatch {
        kind: ShapeKind,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidShapeKind { name } => write!(f, "unknown shape kind: {name}"),
            ShapeError::UnregisteredShapeKind { kind } => {
                write!(f, "shape kind not registered: {kind}")
            }
            ShapeError::InvalidTriangle { a, b, c } => {
                write!(f, "invalid triangle side lengths: ({a}, {b}, {c})")
            }
            ShapeError::ArityMismatch {
                kind,
                expected,
                got,
            } => write!(f, "{kind} takes {expected} argument(s), got {got}"),
        }
    }
}

impl std::error::Error for ShapeError {}
