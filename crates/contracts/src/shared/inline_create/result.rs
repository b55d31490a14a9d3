use super::envelope::CreateResponse;
use super::error::InlineCreateError;
use super::record::{CreatedRecord, RecordId};

/// Outcome of a single inline-create submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { id: RecordId, label: String },
    Failure { error: InlineCreateError },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Message for the user, `None` on success.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error.user_message()),
        }
    }
}

impl From<CreatedRecord> for SubmissionResult {
    fn from(record: CreatedRecord) -> Self {
        Self::Success {
            id: record.id,
            label: record.name,
        }
    }
}

impl From<InlineCreateError> for SubmissionResult {
    fn from(error: InlineCreateError) -> Self {
        Self::Failure { error }
    }
}

/// Turns a raw HTTP answer (status + body) into a [`SubmissionResult`].
///
/// Only a 2xx envelope with `success: true` and a `result` carrying both
/// `id` and `name` is a success. A 2xx answer missing either is malformed.
pub fn interpret_response(status: u16, body: &str) -> SubmissionResult {
    let ok_status = (200..300).contains(&status);

    let envelope: CreateResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if ok_status => {
            return InlineCreateError::MalformedResponse(format!("not a create envelope: {e}"))
                .into()
        }
        Err(_) => {
            return InlineCreateError::RequestFailed {
                status: Some(status),
                message: format!("HTTP {status}"),
                errors: Default::default(),
            }
            .into()
        }
    };

    if !envelope.success || !ok_status {
        let message = envelope
            .message
            .clone()
            .unwrap_or_else(|| format!("HTTP {status}"));
        return InlineCreateError::RequestFailed {
            status: Some(status),
            message,
            errors: envelope.errors,
        }
        .into();
    }

    match envelope.result.as_ref().and_then(CreatedRecord::from_result) {
        Some(record) => record.into(),
        None => InlineCreateError::MalformedResponse(format!(
            "response is missing `id` or `name`: {}",
            envelope
                .result
                .map(|r| r.to_string())
                .unwrap_or_else(|| "no result".to_string())
        ))
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(result: SubmissionResult) -> InlineCreateError {
        match result {
            SubmissionResult::Failure { error } => error,
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_success_with_numeric_id() {
        let result = interpret_response(
            200,
            r#"{"success": true, "result": {"id": 2, "name": "Beta Corp", "email": null}}"#,
        );
        assert_eq!(
            result,
            SubmissionResult::Success {
                id: RecordId::from(2),
                label: "Beta Corp".into()
            }
        );
        assert!(result.message().is_none());
    }

    #[test]
    fn test_zero_id_is_malformed() {
        let error = error_of(interpret_response(
            201,
            r#"{"success": true, "result": {"id": 0, "name": "Ghost"}}"#,
        ));
        assert!(matches!(error, InlineCreateError::MalformedResponse(_)));
    }

    #[test]
    fn test_success_flag_with_empty_result_is_malformed() {
        let error = error_of(interpret_response(200, r#"{"success": true, "result": {}}"#));
        assert!(matches!(error, InlineCreateError::MalformedResponse(_)));
    }

    #[test]
    fn test_success_flag_without_result_is_malformed() {
        let error = error_of(interpret_response(201, r#"{"success": true}"#));
        assert!(matches!(error, InlineCreateError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_ok_body_is_malformed() {
        let error = error_of(interpret_response(200, "<html>login</html>"));
        assert!(matches!(error, InlineCreateError::MalformedResponse(_)));
    }

    #[test]
    fn test_rejected_envelope_keeps_field_errors() {
        let error = error_of(interpret_response(
            400,
            r#"{"success": false, "errors": {"name": ["This field is required."]}}"#,
        ));
        match error {
            InlineCreateError::RequestFailed { status, errors, .. } => {
                assert_eq!(status, Some(400));
                assert_eq!(errors["name"], vec!["This field is required.".to_string()]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_success_false_with_ok_status_is_request_failure() {
        let error = error_of(interpret_response(200, r#"{"success": false}"#));
        assert!(matches!(
            error,
            InlineCreateError::RequestFailed {
                status: Some(200),
                ..
            }
        ));
    }

    #[test]
    fn test_server_error_without_envelope() {
        let error = error_of(interpret_response(500, "Internal Server Error"));
        assert_eq!(
            error,
            InlineCreateError::RequestFailed {
                status: Some(500),
                message: "HTTP 500".into(),
                errors: Default::default(),
            }
        );
    }

    #[test]
    fn test_success_envelope_with_error_status_is_not_trusted() {
        let error = error_of(interpret_response(
            503,
            r#"{"success": true, "result": {"id": 1, "name": "x"}}"#,
        ));
        assert!(matches!(error, InlineCreateError::RequestFailed { .. }));
    }
}
