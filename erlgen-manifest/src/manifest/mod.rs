//! Manifest types and parsing for erlgen.toml files.

mod parse;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

pub use parse::parse_manifest;

/// Application name used when none is configured.
pub const DEFAULT_PACKAGE_NAME: &str = "swagger";

/// Application version used when none is configured.
pub const DEFAULT_PACKAGE_VERSION: &str = "1.0.0";

/// Folder (relative to the output root) holding generated API and model docs.
pub const DOC_PATH: &str = "doc/";

/// Root manifest for erlgen.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Erlang application metadata
    #[serde(default)]
    pub package: PackageConfig,

    /// Model naming options
    #[serde(default)]
    pub models: ModelConfig,
}

/// `[package]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Erlang application name (convention: lowercase)
    #[serde(default = "default_package_name", deserialize_with = "non_empty_name")]
    pub name: String,

    /// Erlang application version, copied verbatim into the `.app.src`
    #[serde(default = "default_package_version", deserialize_with = "non_empty_version")]
    pub version: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            version: default_package_version(),
        }
    }
}

/// `[models]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Joined in front of every model name with an underscore
    #[serde(default, deserialize_with = "empty_as_none")]
    pub prefix: Option<String>,

    /// Joined after every model name with an underscore
    #[serde(default, deserialize_with = "empty_as_none")]
    pub suffix: Option<String>,
}

impl Manifest {
    /// Create a manifest for the given application name and version.
    ///
    /// Empty values fall back to `swagger` and `1.0.0`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: PackageConfig {
                name: or_default(name.into(), default_package_name),
                version: or_default(version.into(), default_package_version),
            },
            models: ModelConfig::default(),
        }
    }

    pub fn with_model_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.models.prefix = Some(prefix.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_model_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.models.suffix = Some(suffix.into()).filter(|s| !s.is_empty());
        self
    }

    /// Properties handed to the template renderer alongside the resolved names.
    ///
    /// Models and APIs share the application namespace, so `modelPackage` and
    /// `apiPackage` both equal the package name.
    pub fn template_properties(&self) -> IndexMap<&'static str, String> {
        let mut props = IndexMap::new();
        props.insert("packageName", self.package.name.clone());
        props.insert("packageVersion", self.package.version.clone());
        props.insert("apiDocPath", DOC_PATH.to_string());
        props.insert("modelDocPath", DOC_PATH.to_string());
        props.insert("modelPackage", self.package.name.clone());
        props.insert("apiPackage", self.package.name.clone());
        props
    }
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

fn default_package_version() -> String {
    DEFAULT_PACKAGE_VERSION.to_string()
}

fn or_default(value: String, default: fn() -> String) -> String {
    if value.trim().is_empty() {
        default()
    } else {
        value
    }
}

fn non_empty_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(or_default(String::deserialize(deserializer)?, default_package_name))
}

fn non_empty_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(or_default(
        String::deserialize(deserializer)?,
        default_package_version,
    ))
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
