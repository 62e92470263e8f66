use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("unknown {language} primitive type '{name}'")]
    #[diagnostic(
        code(erlgen::unknown_primitive),
        help("known primitives are: {known}")
    )]
    UnknownPrimitiveType {
        name: String,
        language: &'static str,
        known: String,
    },
}

impl Error {
    pub fn unknown_primitive(name: &str, language: &'static str, known: &[&str]) -> Self {
        Error::UnknownPrimitiveType {
            name: name.to_string(),
            language,
            known: known.join(", "),
        }
    }
}
