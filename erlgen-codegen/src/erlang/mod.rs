//! Erlang target: reserved words, escaping and type specs.

mod naming;
mod type_mapper;

pub use naming::ERLANG_NAMING;
pub use type_mapper::ErlangTypeMapper;
