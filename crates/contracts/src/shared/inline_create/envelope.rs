use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Validation messages keyed by form field name, e.g. `{"name": ["This field is required."]}`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// JSON answer of every inline-create endpoint.
///
/// ```json
/// {"success": true,  "result": {"id": 2, "name": "Beta Corp"}}
/// {"success": false, "errors": {"name": ["This field is required."]}}
/// {"success": false, "message": "storage unavailable"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateResponse {
    /// Successful envelope carrying the serialized record as `result`.
    pub fn created<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            success: true,
            result: Some(serde_json::to_value(record)?),
            errors: FieldErrors::new(),
            message: None,
        })
    }

    pub fn rejected(errors: FieldErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            errors: FieldErrors::new(),
            message: Some(message.into()),
        }
    }
}

/// Adds one message to `errors` under `field`.
pub fn push_field_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}
