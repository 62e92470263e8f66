//! Language-agnostic schema type graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A schema type as handed over by the API description parser.
///
/// Model references are kept by name and never inlined, so a `TypeRef` is
/// always a finite tree even when the models it names refer to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeRef {
    /// A schema primitive such as `integer` or `DateTime`.
    Primitive(String),
    /// An ordered, homogeneous sequence.
    Array(Box<TypeRef>),
    /// A string-keyed map (`additionalProperties`).
    Map(Box<TypeRef>),
    /// A reference to another model definition.
    Model(String),
}

impl TypeRef {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeRef::Primitive(name.into())
    }

    pub fn array(inner: TypeRef) -> Self {
        TypeRef::Array(Box::new(inner))
    }

    pub fn map(value: TypeRef) -> Self {
        TypeRef::Map(Box::new(value))
    }

    pub fn model(name: impl Into<String>) -> Self {
        TypeRef::Model(name.into())
    }

    /// The primitive or model at the bottom of any container nesting.
    pub fn innermost(&self) -> &TypeRef {
        match self {
            TypeRef::Array(inner) | TypeRef::Map(inner) => inner.innermost(),
            leaf => leaf,
        }
    }
}

/// Schema-style notation, used in diagnostics (e.g. `array<map<Pet>>`).
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(name) | TypeRef::Model(name) => write!(f, "{}", name),
            TypeRef::Array(inner) => write!(f, "array<{}>", inner),
            TypeRef::Map(inner) => write!(f, "map<{}>", inner),
        }
    }
}
