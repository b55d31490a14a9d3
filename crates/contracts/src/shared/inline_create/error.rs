use super::envelope::FieldErrors;
use thiserror::Error;

const MSG_MALFORMED: &str = "Failed to add the new record. Please try again.";
const MSG_CHECK_INPUT: &str = "An error occurred. Please check your input and try again.";
const MSG_FIELD_ERRORS: &str = "Please check your input and try again.";
const MSG_SERVER: &str = "A server error occurred. Please try again later.";

/// Ways an inline-create attempt can end without a new option.
///
/// None of them is retried and none of them touches the select field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineCreateError {
    /// No dialog was bound to the field. Programming error, console only.
    #[error("no create dialog is bound to field `{0}`")]
    BindingMissing(String),

    /// The dialog already has a request on the wire.
    #[error("a create request for field `{0}` is already in flight")]
    SubmissionInFlight(String),

    /// Transport succeeded but the payload lacks `id`/`name` or is not an envelope.
    #[error("malformed create response: {0}")]
    MalformedResponse(String),

    /// Network error, non-2xx status or `success: false`.
    #[error("create request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
        errors: FieldErrors,
    },
}

impl InlineCreateError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: None,
            message: message.into(),
            errors: FieldErrors::new(),
        }
    }

    /// Whether the end user should see this error (as opposed to the console only).
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::MalformedResponse(_) | Self::RequestFailed { .. }
        )
    }

    /// Text shown in the alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::BindingMissing(_) | Self::SubmissionInFlight(_) => self.to_string(),
            Self::MalformedResponse(_) => MSG_MALFORMED.to_string(),
            Self::RequestFailed { errors, .. } if !errors.is_empty() => {
                let mut text = MSG_FIELD_ERRORS.to_string();
                for (field, messages) in errors {
                    for message in messages {
                        text.push('\n');
                        text.push_str(&format!("{field}: {message}"));
                    }
                }
                text
            }
            Self::RequestFailed {
                status: Some(status),
                ..
            } if (400..500).contains(status) => MSG_CHECK_INPUT.to_string(),
            Self::RequestFailed { .. } => MSG_SERVER.to_string(),
        }
    }
}
