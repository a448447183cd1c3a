//! Areas of planar shapes through a kind registry.
//!
//! - `ShapeKind` names a category; `Registry` maps each kind to a constructor.
//! - `AnyShape::create` resolves a kind (enum or canonical string), looks up
//!   the constructor and builds the shape.
//! - `Circle` and `Triangle` implement the `Shape` capability; `compute_area`
//!   is the free-function entry point.
//!
//! Adding a variant: implement `Shape` and `RegisteredShape`, add an
//! `AnyShape` arm and a `ShapeKind` variant, and register it in
//! `Registry::builtin`.

mod area;
mod cfg;
mod circle;
mod error;
mod kind;
pub mod registry;
mod shape;
mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::compute_area;
pub use cfg::{is_close, REL_TOL};
pub use circle::Circle;
pub use error::ShapeError;
pub use kind::{KindArg, ShapeKind};
pub use registry::{Constructor, RegisteredShape, Registry};
pub use shape::{AnyShape, Shape};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{compute_area, AnyShape, Circle, Shape, ShapeError, ShapeKind, Triangle};
}
