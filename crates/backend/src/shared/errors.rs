use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::inline_create::{push_field_error, CreateResponse, FieldErrors};
use thiserror::Error;

const TOO_LARGE: &str = "File is too large.";

/// Ошибки создания записи через inline-create диалог
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("validation failed on {} field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("upload storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Body cut off by the request size limit; `field` is the file input
    /// being read at that moment, when known.
    #[error("request body too large (field {field:?})")]
    TooLarge { field: Option<String> },

    #[error("malformed form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CreateError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Multipart(e) => e.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Puts a body-limit failure with no known field on `file_field`, the
    /// upload input of a form that has exactly one.
    pub fn too_large_on(self, file_field: &str) -> Self {
        match self {
            Self::TooLarge { field: None } => Self::TooLarge {
                field: Some(file_field.to_string()),
            },
            other => other,
        }
    }
}

impl IntoResponse for CreateError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            Self::Invalid(errors) => {
                tracing::debug!("Create rejected: {:?}", errors);
                CreateResponse::rejected(errors)
            }
            Self::TooLarge { field: Some(field) } => {
                tracing::warn!("Create rejected, body too large at '{}'", field);
                let mut errors = FieldErrors::new();
                push_field_error(&mut errors, &field, TOO_LARGE);
                CreateResponse::rejected(errors)
            }
            Self::TooLarge { field: None } => {
                tracing::warn!("Create rejected, body too large");
                CreateResponse::failed("the submitted form is too large")
            }
            Self::Multipart(e) => {
                tracing::warn!("Create rejected, bad multipart body: {}", e);
                CreateResponse::failed(format!("malformed form data: {e}"))
            }
            other => {
                tracing::error!("Create failed: {}", other);
                CreateResponse::failed("the record could not be saved")
            }
        };
        (status, Json(envelope)).into_response()
    }
}
