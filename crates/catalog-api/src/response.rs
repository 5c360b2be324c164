//! Response shapes shared by the handlers

use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

/// Structured field-level validation failure, enumerating which input fields
/// broke which constraints.
#[derive(Debug, Serialize)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationProblem {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        Self {
            title: "One or more validation errors occurred.".to_string(),
            status: 400,
            errors: fields,
        }
    }
}
