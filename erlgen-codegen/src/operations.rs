//! Post-processing of operation metadata after names are resolved.

use serde::{Deserialize, Serialize};

/// The per-operation fields a template needs besides resolved names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationMeta {
    /// Already-resolved function name.
    pub operation_id: String,
    /// HTTP method verb (e.g. "PUT").
    pub http_method: String,
    /// Request path template (e.g. "/pet/{petId}").
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl OperationMeta {
    pub fn new(
        operation_id: impl Into<String>,
        http_method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            operation_id: operation_id.into(),
            http_method: http_method.into(),
            path: path.into(),
            summary: None,
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Lower-case every HTTP method in place (`PUT` -> `put`).
pub fn normalize_http_methods(operations: &mut [OperationMeta]) {
    for operation in operations {
        operation.http_method.make_ascii_lowercase();
    }
}

/// Lower-case every HTTP method; nothing else is touched.
pub fn post_process_operations(mut operations: Vec<OperationMeta>) -> Vec<OperationMeta> {
    normalize_http_methods(&mut operations);
    operations
}
