//! Diagnostics produced while resolving names.
//!
//! Renames are never fatal. Every resolution call hands back the identifier it
//! settled on together with at most one diagnostic explaining why it differs
//! from what the schema author wrote.

use serde::Serialize;

use crate::Role;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The generated name differs from the schema name in a way the operator
    /// should know about.
    Warning,
    /// Informational message about a fallback.
    Info,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Why a name was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The name is an Erlang keyword.
    ReservedWordCollision,
    /// The name starts with a digit and cannot be an atom or variable.
    LeadingDigit,
    /// Nothing usable was left after stripping illegal characters.
    IllegalCharacterInput,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::ReservedWordCollision | DiagnosticKind::LeadingDigit => {
                Severity::Warning
            }
            DiagnosticKind::IllegalCharacterInput => Severity::Info,
        }
    }
}

/// A rename recorded during name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// The role the name was resolved for.
    pub role: Role,
    /// The name as written in the schema.
    pub original: String,
    /// The identifier used instead.
    pub replacement: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        role: Role,
        original: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        let original = original.into();
        let replacement = replacement.into();
        let what = role.description();
        let message = match kind {
            DiagnosticKind::ReservedWordCollision => format!(
                "{} (reserved word) cannot be used as {}. Renamed to {}",
                original, what, replacement
            ),
            DiagnosticKind::LeadingDigit => format!(
                "{} cannot start with a digit when used as {}. Renamed to {}",
                original, what, replacement
            ),
            DiagnosticKind::IllegalCharacterInput => format!(
                "{:?} has no characters usable in {}. Replaced with {}",
                original, what, replacement
            ),
        };

        Self {
            severity: kind.severity(),
            kind,
            role,
            original,
            replacement,
            message,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
