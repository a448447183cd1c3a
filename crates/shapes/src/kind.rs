//! Shape kinds and their canonical names.

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// Discrete category of shape; selects the constructor in a `Registry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Triangle,
}

impl ShapeKind {
    /// All kinds in declaration order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Triangle];

    /// Canonical string form (`"circle"`, `"triangle"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ShapeError::InvalidShapeKind { name: s.to_string() })
    }
}

/// Kind selector accepted by the factory: a `ShapeKind` or its canonical name.
///
/// Strings are resolved by `KindArg::resolve` before any registry lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg<'a> {
    Kind(ShapeKind),
    Name(&'a str),
}

impl KindArg<'_> {
    #[inline]
    pub fn resolve(self) -> Result<ShapeKind, ShapeError> {
        match self {
            KindArg::Kind(kind) => Ok(kind),
            KindArg::Name(name) => name.parse(),
        }
    }
}

impl From<ShapeKind> for KindArg<'_> {
    fn from(kind: ShapeKind) -> Self {
        KindArg::Kind(kind)
    }
}

impl<'a> From<&'a str> for KindArg<'a> {
    fn from(name: &'a str) -> Self {
        KindArg::Name(name)
    }
}

impl<'a> From<&'a String> for KindArg<'a> {
    fn from(name: &'a String) -> Self {
        KindArg::Name(name.as_str())
    }
}
