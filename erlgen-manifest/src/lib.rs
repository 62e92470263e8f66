//! erlgen.toml parsing for the erlgen naming engine.
//!
//! The manifest carries the few options the naming engine reads: the Erlang
//! application name and version, and an optional prefix/suffix joined onto
//! every model name.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_PACKAGE_NAME, DEFAULT_PACKAGE_VERSION, DOC_PATH, Manifest, ModelConfig, PackageConfig, parse_manifest,
};
