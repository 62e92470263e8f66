//! Role-specific identifier resolution.

use erlgen_core::{camelize, starts_with_digit, underscore};
use erlgen_manifest::Manifest;

use crate::{
    Diagnostic, DiagnosticKind, ERLANG_NAMING, Role, language::NamingConvention,
    sanitize::{clean, sanitize},
};

/// Model naming options applied by [`NameResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleConfig {
    pub model_name_prefix: Option<String>,
    pub model_name_suffix: Option<String>,
}

impl RoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.model_name_prefix = Some(prefix.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn model_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.model_name_suffix = Some(suffix.into()).filter(|s| !s.is_empty());
        self
    }
}

impl From<&Manifest> for RoleConfig {
    fn from(manifest: &Manifest) -> Self {
        Self {
            model_name_prefix: manifest.models.prefix.clone(),
            model_name_suffix: manifest.models.suffix.clone(),
        }
    }
}

/// An identifier plus the diagnostic explaining any rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub identifier: String,
    pub diagnostic: Option<Diagnostic>,
}

impl Resolved {
    pub(crate) fn new(
        raw: &str,
        identifier: String,
        role: Role,
        kind: Option<DiagnosticKind>,
    ) -> Self {
        let diagnostic = kind.map(|kind| Diagnostic::new(kind, role, raw, &identifier));
        Self {
            identifier,
            diagnostic,
        }
    }

    /// Returns true if the identifier differs from the schema name for a
    /// reason worth reporting.
    pub fn was_renamed(&self) -> bool {
        self.diagnostic.is_some()
    }

    pub fn into_identifier(self) -> String {
        self.identifier
    }
}

/// A name that went through the model or operation rename rule but has not
/// been cased yet.
struct Renamed {
    name: String,
    kind: Option<DiagnosticKind>,
}

/// Resolves raw schema names into identifiers for a given [`Role`].
///
/// Holds only immutable configuration, so one resolver can be shared across
/// threads and every call is independent.
#[derive(Debug, Clone)]
pub struct NameResolver {
    config: RoleConfig,
    convention: NamingConvention,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(RoleConfig::default())
    }
}

impl NameResolver {
    pub fn new(config: RoleConfig) -> Self {
        Self {
            config,
            convention: ERLANG_NAMING,
        }
    }

    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(RoleConfig::from(manifest))
    }

    pub fn config(&self) -> &RoleConfig {
        &self.config
    }

    pub fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.convention.is_reserved(name)
    }

    /// Resolve a raw name for the given role.
    pub fn resolve(&self, raw: &str, role: Role) -> Resolved {
        let resolved = match role {
            Role::Variable => self.var_name(raw),
            Role::Parameter => self.param_name(raw),
            Role::ModelName | Role::ModelDocFilename => self.model_name(raw, role),
            Role::ModelFilename => self.model_filename(raw),
            Role::ApiFilename => self.api_filename(raw),
            Role::OperationId => self.operation_id(raw),
            Role::ApiName | Role::ApiDocFilename => self.api_name(raw, role),
        };
        self.ensure_legal(raw, role, resolved)
    }

    /// Resolve a raw name and drop the diagnostic.
    pub fn identifier(&self, raw: &str, role: Role) -> String {
        self.resolve(raw, role).identifier
    }

    /// `pet_id` -> `petId`, `end` -> `end_`
    fn var_name(&self, raw: &str) -> Resolved {
        sanitize(raw, Role::Variable, true, &self.convention)
    }

    /// `pet_id` -> `PetId`, `end` -> `End_`
    fn param_name(&self, raw: &str) -> Resolved {
        let var = sanitize(raw, Role::Parameter, true, &self.convention);
        let identifier = camelize(&var.identifier, false);
        let kind = var.diagnostic.map(|d| d.kind);
        Resolved::new(raw, identifier, Role::Parameter, kind)
    }

    /// `phone_number` -> `PhoneNumber`, `catch` -> `ModelCatch`
    fn model_name(&self, raw: &str, role: Role) -> Resolved {
        let base = self.model_base(raw, role);
        let identifier = camelize(&underscore(&base.name), false);
        Resolved::new(raw, identifier, role, base.kind)
    }

    /// `PhoneNumber` -> `phone_number`, `catch` -> `model_catch`
    fn model_filename(&self, raw: &str) -> Resolved {
        let base = self.model_base(raw, Role::ModelFilename);
        Resolved::new(raw, underscore(&base.name), Role::ModelFilename, base.kind)
    }

    /// Apply the configured prefix/suffix, strip illegal characters and move
    /// keywords out of the way with a `model_` prefix.
    fn model_base(&self, raw: &str, role: Role) -> Renamed {
        let mut name = raw.to_string();
        if let Some(prefix) = &self.config.model_name_prefix {
            name = format!("{}_{}", prefix, name);
        }
        if let Some(suffix) = &self.config.model_name_suffix {
            name = format!("{}_{}", name, suffix);
        }

        let (name, kind) = clean(&name, role);
        self.prefix_if_illegal(name, role, kind)
    }

    /// `Pet` -> `pet_api`, `store-order` -> `store_order_api`
    fn api_filename(&self, raw: &str) -> Resolved {
        let (name, mut kind) = clean(raw, Role::ApiFilename);
        let mut base = underscore(&name);
        if starts_with_digit(&base) {
            base = format!("{}_{}", Role::ApiFilename.escape_prefix(), base);
            kind = Some(DiagnosticKind::LeadingDigit);
        }
        Resolved::new(raw, format!("{}_api", base), Role::ApiFilename, kind)
    }

    /// `getPetById` -> `getPetById`, `receive` -> `callReceive`
    fn operation_id(&self, raw: &str) -> Resolved {
        let (name, kind) = clean(raw, Role::OperationId);
        let renamed = self.prefix_if_illegal(name, Role::OperationId, kind);
        Resolved::new(
            raw,
            camelize(&renamed.name, true),
            Role::OperationId,
            renamed.kind,
        )
    }

    /// `pet` -> `PetApi`, `""` -> `DefaultApi`
    ///
    /// The `Api` suffix already keeps keywords apart, so only leading digits
    /// are escaped.
    fn api_name(&self, raw: &str, role: Role) -> Resolved {
        let (mut name, mut kind) = clean(raw, role);
        if starts_with_digit(&name) {
            name = format!("{}_{}", role.escape_prefix(), name);
            kind = Some(DiagnosticKind::LeadingDigit);
        }
        Resolved::new(raw, format!("{}Api", camelize(&name, false)), role, kind)
    }

    /// Join the role prefix (`model_`, `call_`, ...) onto reserved or
    /// digit-leading names.
    fn prefix_if_illegal(&self, name: String, role: Role, kind: Option<DiagnosticKind>) -> Renamed {
        let collision = if self.is_reserved(&name) {
            Some(DiagnosticKind::ReservedWordCollision)
        } else if starts_with_digit(&name) {
            Some(DiagnosticKind::LeadingDigit)
        } else {
            None
        };

        match collision {
            Some(collision) => Renamed {
                name: format!("{}_{}", role.escape_prefix(), name),
                kind: Some(collision),
            },
            None => Renamed { name, kind },
        }
    }

    /// Final keyword and leading-digit check on every pipeline output.
    fn ensure_legal(&self, raw: &str, role: Role, resolved: Resolved) -> Resolved {
        let (identifier, kind) = if self.is_reserved(&resolved.identifier) {
            (
                format!("{}_", resolved.identifier),
                DiagnosticKind::ReservedWordCollision,
            )
        } else if starts_with_digit(&resolved.identifier) {
            (
                format!("{}_{}", role.escape_prefix(), resolved.identifier),
                DiagnosticKind::LeadingDigit,
            )
        } else {
            return resolved;
        };
        Resolved::new(raw, identifier, role, Some(kind))
    }
}
