//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - reserved words and their escaping
//! - [`TypeMapper`] - mapping schema types to type declarations

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::TypeMapper;
