//! Syntactic roles a schema name can be resolved for.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Where a resolved name ends up in the generated client.
///
/// The same schema name is cased differently depending on its role: `pet_id`
/// is `petId` as a record field but `PetId` as a function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Record field / map key (lower camel case atom).
    Variable,
    /// Function parameter (upper camel case Erlang variable).
    Parameter,
    /// Model type name.
    ModelName,
    /// Model module file name (lower snake case).
    ModelFilename,
    /// API module file name (lower snake case, `_api` suffix).
    ApiFilename,
    /// API function name.
    OperationId,
    /// API module display name (`PetApi`).
    ApiName,
    /// Model documentation file name.
    ModelDocFilename,
    /// API documentation file name.
    ApiDocFilename,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Variable,
        Role::Parameter,
        Role::ModelName,
        Role::ModelFilename,
        Role::ApiFilename,
        Role::OperationId,
        Role::ApiName,
        Role::ModelDocFilename,
        Role::ApiDocFilename,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Variable => "variable",
            Role::Parameter => "parameter",
            Role::ModelName => "model_name",
            Role::ModelFilename => "model_filename",
            Role::ApiFilename => "api_filename",
            Role::OperationId => "operation_id",
            Role::ApiName => "api_name",
            Role::ModelDocFilename => "model_doc_filename",
            Role::ApiDocFilename => "api_doc_filename",
        }
    }

    /// Human-readable description used in diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Variable => "a variable name",
            Role::Parameter => "a parameter name",
            Role::ModelName | Role::ModelDocFilename => "a model name",
            Role::ModelFilename => "a model filename",
            Role::ApiFilename => "an API filename",
            Role::OperationId => "a method name",
            Role::ApiName | Role::ApiDocFilename => "an API name",
        }
    }

    /// Prefix joined in front of a name that collides or starts with a digit.
    pub fn escape_prefix(&self) -> &'static str {
        match self {
            Role::Variable | Role::Parameter => "var",
            Role::ModelName | Role::ModelFilename | Role::ModelDocFilename => "model",
            Role::ApiFilename | Role::ApiName | Role::ApiDocFilename => "api",
            Role::OperationId => "call",
        }
    }

    /// Name substituted when nothing usable survives sanitizing.
    pub fn fallback(&self) -> &'static str {
        match self {
            Role::ApiFilename | Role::ApiName | Role::ApiDocFilename => "default",
            _ => "value",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}
