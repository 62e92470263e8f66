//! Escaping schema text (descriptions, examples) before it reaches templates.

/// Remove double quotes so schema text cannot close a string literal.
pub fn escape_quotation_mark(input: &str) -> String {
    input.replace('"', "")
}

/// Break up comment delimiters so schema text cannot open or close a block
/// comment in the generated docs.
pub fn escape_unsafe_characters(input: &str) -> String {
    input.replace("*/", "*_/").replace("/*", "/_*")
}
