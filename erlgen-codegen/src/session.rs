//! Naming session passed through a schema-processing pass.

use erlgen_core::TypeRef;
use erlgen_manifest::Manifest;

use crate::{Diagnostic, ErlangTypeMapper, NameResolver, Resolved, Result, Role, TypeMapper};

/// A resolver and type mapper plus every diagnostic produced through them.
///
/// The resolver itself is stateless; the session is where a generator run
/// accumulates renames to show the operator once the pass is done.
#[derive(Debug, Clone)]
pub struct NamingSession {
    resolver: NameResolver,
    type_mapper: ErlangTypeMapper,
    diagnostics: Vec<Diagnostic>,
}

impl NamingSession {
    pub fn new(resolver: NameResolver) -> Self {
        Self {
            type_mapper: ErlangTypeMapper::new(resolver.clone()),
            resolver,
            diagnostics: Vec::new(),
        }
    }

    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(NameResolver::from_manifest(manifest))
    }

    /// Replace the type mapper, e.g. to add primitive mappings.
    pub fn with_type_mapper(mut self, type_mapper: ErlangTypeMapper) -> Self {
        self.type_mapper = type_mapper;
        self
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    /// Resolve a name and record its diagnostic, if any.
    pub fn resolve(&mut self, raw: &str, role: Role) -> String {
        let Resolved {
            identifier,
            diagnostic,
        } = self.resolver.resolve(raw, role);
        if let Some(diagnostic) = diagnostic {
            self.add_diagnostic(diagnostic);
        }
        identifier
    }

    /// Render a type declaration, recording renames of referenced models.
    pub fn type_declaration(&mut self, ty: &TypeRef) -> Result<String> {
        let declaration = self.type_mapper.map_type(ty)?;
        if let TypeRef::Model(name) = ty.innermost() {
            // the mapper drops diagnostics
            if let Some(diagnostic) = self.resolver.resolve(name, Role::ModelName).diagnostic {
                self.add_diagnostic(diagnostic);
            }
        }
        Ok(declaration)
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity.is_warning() {
            tracing::warn!(
                target: "erlgen::naming",
                role = %diagnostic.role,
                original = %diagnostic.original,
                replacement = %diagnostic.replacement,
                "{}",
                diagnostic.message
            );
        } else {
            tracing::debug!(
                target: "erlgen::naming",
                role = %diagnostic.role,
                "{}",
                diagnostic.message
            );
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the collected diagnostics, leaving the session empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

impl Default for NamingSession {
    fn default() -> Self {
        Self::new(NameResolver::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagnosticKind, Severity};

    #[test]
    fn test_session_creation() {
        let session = NamingSession::default();
        assert!(session.diagnostics().is_empty());
        assert!(!session.has_warnings());
    }

    #[test]
    fn test_session_records_renames() {
        let mut session = NamingSession::default();

        assert_eq!(session.resolve("pet_id", Role::Variable), "petId");
        assert_eq!(session.resolve("end", Role::Variable), "end_");
        assert_eq!(session.resolve("receive", Role::OperationId), "callReceive");
        assert_eq!(session.resolve("", Role::Variable), "value");

        assert_eq!(session.diagnostics().len(), 3);
        assert_eq!(session.warning_count(), 2);
        assert!(session.has_warnings());
        assert_eq!(session.diagnostics()[2].severity, Severity::Info);
    }

    #[test]
    fn test_type_declaration_records_model_rename() {
        let mut session = NamingSession::default();
        let declaration = session
            .type_declaration(&TypeRef::array(TypeRef::model("when")))
            .unwrap();

        assert_eq!(declaration, "[ModelWhen]");
        let warnings: Vec<_> = session.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, DiagnosticKind::ReservedWordCollision);
    }

    #[test]
    fn test_type_declaration_error_records_nothing() {
        let mut session = NamingSession::default();
        assert!(session.type_declaration(&TypeRef::primitive("uuid")).is_err());
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn test_take_diagnostics() {
        let mut session = NamingSession::default();
        session.resolve("case", Role::ModelName);
        let taken = session.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn test_from_manifest_applies_affixes() {
        let manifest: Manifest = "[models]\nsuffix = \"record\"".parse().unwrap();
        let mut session = NamingSession::from_manifest(&manifest);
        assert_eq!(session.resolve("Pet", Role::ModelFilename), "pet_record");
        assert_eq!(
            session.type_declaration(&TypeRef::model("Pet")).unwrap(),
            "PetRecord"
        );
    }
}
