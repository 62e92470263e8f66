//! Erlang type mapper implementation.

use indexmap::IndexMap;

use crate::{NameResolver, Role, TypeMapper};

/// Schema primitives and the Erlang type spec each one maps to.
const DEFAULT_PRIMITIVES: &[(&str, &str)] = &[
    ("integer", "integer()"),
    ("long", "integer()"),
    ("number", "number()"),
    ("float", "float()"),
    ("double", "float()"),
    ("boolean", "boolean()"),
    ("string", "string()"),
    ("date", "calendar:datetime()"),
    ("DateTime", "calendar:datetime()"),
    ("password", "string()"),
    ("File", "file:name()"),
    ("file", "file:name()"),
    ("binary", "binary()"),
    ("ByteArray", "string()"),
];

/// Map keys are always strings in the generated specs.
const MAP_KEY_PRIMITIVE: &str = "string";

/// Erlang type mapper implementation.
///
/// Model references resolve to the same name the model itself is generated
/// under, so prefix/suffix configuration applies to them as well.
#[derive(Debug, Clone)]
pub struct ErlangTypeMapper {
    primitives: IndexMap<String, String>,
    resolver: NameResolver,
}

impl Default for ErlangTypeMapper {
    fn default() -> Self {
        Self::new(NameResolver::default())
    }
}

impl ErlangTypeMapper {
    pub fn new(resolver: NameResolver) -> Self {
        let primitives = DEFAULT_PRIMITIVES
            .iter()
            .map(|(schema, erlang)| (schema.to_string(), erlang.to_string()))
            .collect();
        Self {
            primitives,
            resolver,
        }
    }

    /// Add or override a primitive mapping.
    pub fn with_primitive(mut self, schema: impl Into<String>, erlang: impl Into<String>) -> Self {
        self.primitives.insert(schema.into(), erlang.into());
        self
    }

    pub fn primitives(&self) -> &IndexMap<String, String> {
        &self.primitives
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    fn map_key_type(&self) -> &str {
        self.map_primitive(MAP_KEY_PRIMITIVE).unwrap_or("string()")
    }
}

impl TypeMapper for ErlangTypeMapper {
    fn language(&self) -> &'static str {
        "erlang"
    }

    fn map_primitive(&self, name: &str) -> Option<&str> {
        self.primitives.get(name).map(String::as_str)
    }

    fn known_primitives(&self) -> Vec<&str> {
        self.primitives.keys().map(String::as_str).collect()
    }

    fn map_array(&self, item: &str) -> String {
        format!("[{}]", item)
    }

    fn map_map(&self, value: &str) -> String {
        format!("#{{{} => {}}}", self.map_key_type(), value)
    }

    fn map_model(&self, name: &str) -> String {
        self.resolver.identifier(name, Role::ModelName)
    }
}
