//! Language-agnostic code generation traits.

use erlgen_core::TypeRef;

use crate::{Error, Result};

/// Trait for mapping schema types to language-specific type declarations.
///
/// Implementors supply the leaf mappings and the container notation;
/// [`TypeMapper::map_type`] walks the type graph.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a schema primitive (e.g. `integer`), or `None` if it is unknown
    fn map_primitive(&self, name: &str) -> Option<&str>;

    /// Schema primitives this mapper knows, in table order
    fn known_primitives(&self) -> Vec<&str>;

    /// Wrap an already-mapped item type in the sequence notation
    fn map_array(&self, item: &str) -> String;

    /// Wrap an already-mapped value type in the string-keyed map notation
    fn map_map(&self, value: &str) -> String;

    /// Map a reference to another model
    fn map_model(&self, name: &str) -> String;

    /// Render the full declaration for a schema type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPrimitiveType`] if any primitive in the graph
    /// has no mapping.
    fn map_type(&self, ty: &TypeRef) -> Result<String> {
        match ty {
            TypeRef::Primitive(name) => self
                .map_primitive(name)
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::unknown_primitive(name, self.language(), &self.known_primitives())
                }),
            TypeRef::Array(inner) => Ok(self.map_array(&self.map_type(inner)?)),
            TypeRef::Map(inner) => Ok(self.map_map(&self.map_type(inner)?)),
            TypeRef::Model(name) => Ok(self.map_model(name)),
        }
    }
}
