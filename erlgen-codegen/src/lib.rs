//! Identifier and type-declaration engine for the erlgen Erlang client
//! generator.
//!
//! Given names as written in an API description and an abstract schema type
//! graph, this crate produces Erlang identifiers and type specs that follow
//! the generated client's conventions and never collide with a keyword.
//!
//! # Module Organization
//!
//! - [`language`] - Language-agnostic abstractions (NamingConvention, TypeMapper)
//! - [`erlang`] - Erlang reserved words and type mapping
//! - [`Role`] / [`NameResolver`] - role-specific identifier pipelines
//! - [`NamingSession`] - resolution with diagnostics collected across a pass
//! - [`operations`] - operation metadata post-processing
//! - [`escape`] - escaping schema text for templates
//!
//! # Example
//!
//! ```
//! use erlgen_codegen::{NamingSession, Role};
//! use erlgen_core::TypeRef;
//!
//! let mut session = NamingSession::default();
//! assert_eq!(session.resolve("created-at", Role::Variable), "createdAt");
//! assert_eq!(session.resolve("receive", Role::OperationId), "callReceive");
//! assert_eq!(
//!     session.type_declaration(&TypeRef::array(TypeRef::primitive("integer"))).unwrap(),
//!     "[integer()]"
//! );
//! assert_eq!(session.warning_count(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod diagnostic;
mod error;
mod resolver;
mod role;
mod sanitize;
mod session;

pub mod erlang;
pub mod escape;
pub mod language;
pub mod operations;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use erlang::{ERLANG_NAMING, ErlangTypeMapper};
pub use error::{Error, Result};
pub use language::{NamingConvention, TypeMapper};
pub use operations::{OperationMeta, post_process_operations};
pub use resolver::{NameResolver, Resolved, RoleConfig};
pub use role::Role;
pub use sanitize::sanitize;
pub use session::NamingSession;
