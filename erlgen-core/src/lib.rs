//! Core utilities and types for the erlgen naming engine.
//!
//! This crate provides the case conversion helpers and the schema type graph
//! shared by the manifest and codegen crates.

mod type_ref;
mod utils;

// Schema types
pub use type_ref::TypeRef;
// String utilities
pub use utils::{camelize, sanitize_name, starts_with_digit, underscore};
