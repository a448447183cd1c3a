//! Kind → constructor table behind the shape factory.
//!
//! Purpose
//! - Decouple callers from per-variant construction: callers name a kind and
//!   pass arguments, the registry picks the constructor.
//! - New variants join by implementing `RegisteredShape` and adding one
//!   `register` call to `Registry::builtin`.
//!
//! Lifecycle
//! - `Registry::global()` is built once on first use (fixed registration
//!   order) and is read-only afterwards.
//! - Private registries (`Registry::empty`) may be filled by callers; inserting
//!   a kind twice replaces the earlier constructor (last wins).

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::kind::{KindArg, ShapeKind};
use crate::shape::{AnyShape, Shape};
use crate::triangle::Triangle;

/// Signature of a registered constructor.
pub type BuildFn = fn(&[f64]) -> Result<AnyShape, ShapeError>;

/// A shape variant that can be built from positional `f64` arguments.
pub trait RegisteredShape: Shape + Into<AnyShape> + Sized {
    const KIND: ShapeKind;
    /// Number of positional arguments `from_args` expects.
    const ARITY: usize;
    /// Reports `ArityMismatch` itself when `args.len() != ARITY`.
    fn from_args(args: &[f64]) -> Result<Self, ShapeError>;
}

/// Registered constructor for one kind.
#[derive(Clone, Copy)]
pub struct Constructor {
    pub kind: ShapeKind,
    pub arity: usize,
    pub build: BuildFn,
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("kind", &self.kind)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

fn build_variant<S: RegisteredShape>(args: &[f64]) -> Result<AnyShape, ShapeError> {
    S::from_args(args).map(Into::into)
}

/// Mapping from `ShapeKind` to its constructor.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    ctors: HashMap<ShapeKind, Constructor>,
}

impl Registry {
    /// Registry without any constructors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding every built-in variant.
    pub fn builtin() -> Self {
        let mut reg = Self::empty();
        reg.register::<Circle>();
        reg.register::<Triangle>();
        reg
    }

    /// Process-wide built-in registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::builtin)
    }

    /// Register variant `S` under `S::KIND`. Returns the constructor it replaced.
    pub fn register<S: RegisteredShape>(&mut self) -> Option<Constructor> {
        self.insert(Constructor {
            kind: S::KIND,
            arity: S::ARITY,
            build: build_variant::<S>,
        })
    }

    /// Insert a constructor, replacing any earlier one for the same kind.
    pub fn insert(&mut self, ctor: Constructor) -> Option<Constructor> {
        let prev = self.ctors.insert(ctor.kind, ctor);
        tracing::debug!(
            kind = %ctor.kind,
            arity = ctor.arity,
            replaced = prev.is_some(),
            "registered shape constructor"
        );
        prev
    }

    #[inline]
    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.ctors.contains_key(&kind)
    }

    #[inline]
    pub fn get(&self, kind: ShapeKind) -> Option<&Constructor> {
        self.ctors.get(&kind)
    }

    #[inline]
    pub fn arity(&self, kind: ShapeKind) -> Option<usize> {
        self.get(kind).map(|c| c.arity)
    }

    /// Registered kinds in `ShapeKind` order (enum variant order), independent
    /// of registration order.
    pub fn kinds(&self) -> Vec<ShapeKind> {
        let mut kinds: Vec<_> = self.ctors.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Build a shape of `kind` from `args`.
    ///
    /// Errors
    /// - `InvalidShapeKind` if `kind` is a string naming no kind.
    /// - `UnregisteredShapeKind` if no constructor is registered for it.
    /// - `ArityMismatch` from the variant's `from_args` when `args` has the
    ///   wrong length. `Constructor::arity` is descriptive only.
    /// - Any validation error of the variant itself, unchanged.
    pub fn create<'a>(
        &self,
        kind: impl Into<KindArg<'a>>,
        args: &[f64],
    ) -> Result<AnyShape, ShapeError> {
        let kind = kind.into().resolve().inspect_err(|e| {
            tracing::debug!(error = %e, "shape kind resolution failed");
        })?;
        self.create_kind(kind, args)
    }

    fn create_kind(&self, kind: ShapeKind, args: &[f64]) -> Result<AnyShape, ShapeError> {
        let Some(ctor) = self.ctors.get(&kind) else {
            tracing::debug!(%kind, "no constructor registered");
            return Err(ShapeError::UnregisteredShapeKind { kind });
        };
        (ctor.build)(args).inspect_err(|e| {
            tracing::debug!(%kind, error = %e, "shape construction rejected");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_every_kind_in_order() {
        let reg = Registry::builtin();
        assert_eq!(reg.kinds(), ShapeKind::ALL.to_vec());
        assert_eq!(reg.arity(ShapeKind::Circle), Some(1));
        assert_eq!(reg.arity(ShapeKind::Triangle), Some(3));
    }

    #[test]
    fn global_is_built_once() {
        let a = Registry::global() as *const Registry;
        let b = Registry::global() as *const Registry;
        assert_eq!(a, b);
        assert!(Registry::global().contains(ShapeKind::Triangle));
    }

    #[test]
    fn empty_registry_reports_unregistered() {
        let reg = Registry::empty();
        assert_eq!(
            reg.create(ShapeKind::Circle, &[1.0]).unwrap_err(),
            ShapeError::UnregisteredShapeKind {
                kind: ShapeKind::Circle
            }
        );
        // string resolution happens before lookup
        assert!(matches!(
            reg.create("hexagon", &[1.0]),
            Err(ShapeError::InvalidShapeKind { .. })
        ));
    }

    #[test]
    fn reregistration_last_wins() {
        fn unit_circle(_: &[f64]) -> Result<AnyShape, ShapeError> {
            Ok(Circle::new(1.0).into())
        }
        let mut reg = Registry::empty();
        assert!(reg.register::<Circle>().is_none());
        let prev = reg.insert(Constructor {
            kind: ShapeKind::Circle,
            arity: 0,
            build: unit_circle,
        });
        assert_eq!(prev.map(|c| c.arity), Some(1));
        let shape = reg.create(ShapeKind::Circle, &[]).unwrap();
        assert_eq!(shape.as_circle().map(|c| c.radius), Some(1.0));
    }

    #[test]
    fn kinds_follow_enum_order_not_registration_order() {
        let mut reg = Registry::empty();
        reg.register::<Triangle>();
        reg.register::<Circle>();
        assert_eq!(reg.kinds(), vec![ShapeKind::Circle, ShapeKind::Triangle]);
    }

    #[test]
    fn arity_errors_come_from_the_variant() {
        // a custom constructor with a declared arity is handed any slice
        fn any_len(args: &[f64]) -> Result<AnyShape, ShapeError> {
            Ok(Circle::new(args.len() as f64).into())
        }
        let mut reg = Registry::empty();
        reg.insert(Constructor {
            kind: ShapeKind::Circle,
            arity: 1,
            build: any_len,
        });
        let shape = reg.create(ShapeKind::Circle, &[1.0, 2.0]).unwrap();
        assert_eq!(shape.as_circle().map(|c| c.radius), Some(2.0));
    }

    #[test]
    fn arity_mismatch_reported_by_builtin_variants() {
        let reg = Registry::builtin();
        assert_eq!(
            reg.create("triangle", &[3.0, 4.0]).unwrap_err(),
            ShapeError::ArityMismatch {
                kind: ShapeKind::Triangle,
                expected: 3,
                got: 2
            }
        );
        assert!(matches!(
            reg.create(ShapeKind::Circle, &[1.0, 2.0]),
            Err(ShapeError::ArityMismatch { got: 2, .. })
        ));
    }
}
