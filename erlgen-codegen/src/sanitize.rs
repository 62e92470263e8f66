//! Turning raw schema names into legal identifiers.

use erlgen_core::{camelize, sanitize_name, starts_with_digit};

use crate::{DiagnosticKind, Resolved, Role, language::NamingConvention};

/// Strip illegal characters and leading underscores from a raw name.
///
/// The result starts with a letter or digit (`-end` -> `end`). Names with no letters or digits left degrade to the role's fallback
/// placeholder and report [`DiagnosticKind::IllegalCharacterInput`].
pub fn clean(raw: &str, role: Role) -> (String, Option<DiagnosticKind>) {
    let sanitized = sanitize_name(raw);
    let name = sanitized.trim_start_matches('_');
    if !name.is_empty() {
        (name.to_string(), None)
    } else {
        (
            role.fallback().to_string(),
            Some(DiagnosticKind::IllegalCharacterInput),
        )
    }
}

/// Sanitize and camel-case a raw name, escaping reserved words and leading
/// digits.
///
/// - `"created-at"` -> `"createdAt"`
/// - `"end"` -> `"end_"`
/// - `"1st_choice"` -> `"var1stChoice_"` (for [`Role::Variable`])
pub fn sanitize(
    raw: &str,
    role: Role,
    lower_first: bool,
    convention: &NamingConvention,
) -> Resolved {
    let (name, mut kind) = clean(raw, role);
    let mut name = camelize(&name, lower_first);

    if convention.is_reserved(&name) {
        name = (convention.escape_reserved)(&name);
        kind = Some(DiagnosticKind::ReservedWordCollision);
    } else if starts_with_digit(&name) {
        name = (convention.escape_reserved)(&format!("{}_{}", role.escape_prefix(), name));
        kind = Some(DiagnosticKind::LeadingDigit);
    }

    Resolved::new(raw, name, role, kind)
}
