use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identifier of a freshly created record.
///
/// Servers answer with either a number or a string; both are kept as text,
/// which is what ends up in an `<option value=..>` anyway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reads an identifier out of a JSON value.
    ///
    /// Returns `None` for null, booleans, containers, blank strings and zero.
    pub fn from_json(value: &Value) -> Option<Self> {
        non_blank_scalar(value).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The part of a create response the select field needs: id and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: RecordId,
    pub name: String,
}

impl CreatedRecord {
    /// Extracts `id` and `name` from the `result` object of an envelope.
    ///
    /// Both must be present and non-blank, otherwise the record is unusable.
    pub fn from_result(result: &Value) -> Option<Self> {
        let object = result.as_object()?;
        let id = object.get("id").and_then(RecordId::from_json)?;
        let name = object.get("name").and_then(non_blank_scalar)?;
        Some(Self { id, name })
    }
}

/// One `{value, label}` entry of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<CreatedRecord> for SelectOption {
    fn from(record: CreatedRecord) -> Self {
        Self {
            value: record.id.0,
            label: record.name,
        }
    }
}

/// Usable scalar: a non-blank string or a non-zero number. A zero id or name
/// is as good as a missing one.
fn non_blank_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_numeric_id() {
        let record = CreatedRecord::from_result(&json!({"id": 2, "name": "Beta Corp"})).unwrap();
        assert_eq!(record.id.as_str(), "2");
        assert_eq!(record.name, "Beta Corp");
    }

    #[test]
    fn test_record_from_string_id_keeps_extra_fields_out() {
        let record = CreatedRecord::from_result(&json!({
            "id": "9f1c",
            "name": "Acme",
            "email": "info@acme.test"
        }))
        .unwrap();
        assert_eq!(record.id, RecordId::from("9f1c"));
    }

    #[test]
    fn test_record_requires_id_and_name() {
        assert!(CreatedRecord::from_result(&json!({})).is_none());
        assert!(CreatedRecord::from_result(&json!({"id": 3})).is_none());
        assert!(CreatedRecord::from_result(&json!({"name": "No id"})).is_none());
        assert!(CreatedRecord::from_result(&json!({"id": null, "name": "x"})).is_none());
        assert!(CreatedRecord::from_result(&json!({"id": "  ", "name": "x"})).is_none());
        assert!(CreatedRecord::from_result(&json!({"id": 1, "name": ""})).is_none());
        assert!(CreatedRecord::from_result(&json!([1, "x"])).is_none());
    }

    #[test]
    fn test_zero_id_or_name_is_rejected() {
        assert!(CreatedRecord::from_result(&json!({"id": 0, "name": "Zero"})).is_none());
        assert!(CreatedRecord::from_result(&json!({"id": 0.0, "name": "Zero"})).is_none());
        assert!(CreatedRecord::from_result(&json!({"id": 5, "name": 0})).is_none());
        // The string "0" is a real value
        let record = CreatedRecord::from_result(&json!({"id": "0", "name": 42})).unwrap();
        assert_eq!(record.id.as_str(), "0");
        assert_eq!(record.name, "42");
    }

    #[test]
    fn test_record_into_option() {
        let option: SelectOption = CreatedRecord {
            id: RecordId::from(7),
            name: "Urgent".into(),
        }
        .into();
        assert_eq!(option, SelectOption::new("7", "Urgent"));
    }
}
