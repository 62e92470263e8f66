//! Erlang-specific naming conventions.

use erlgen_core::camelize;
use phf::phf_set;

use crate::language::NamingConvention;

static ERLANG_RESERVED: phf::Set<&'static str> = phf_set! {
    "after", "begin", "catch", "case", "cond", "end", "fun", "if", "let", "of", "receive",
    "try", "when",
};

/// Lowercase first letter plus a trailing underscore (`End` -> `end_`).
fn escape_erlang_reserved(name: &str) -> String {
    format!("{}_", camelize(name, true))
}

/// Erlang naming conventions.
pub static ERLANG_NAMING: NamingConvention = NamingConvention {
    language: "erlang",
    reserved_words: &ERLANG_RESERVED,
    escape_reserved: escape_erlang_reserved,
};
