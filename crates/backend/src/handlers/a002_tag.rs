use axum::{extract::Multipart, extract::State, http::StatusCode, Json};
use contracts::domain::a002_tag::aggregate::Tag;
use contracts::shared::inline_create::{CreateResponse, SelectOption};

use crate::domain::a002_tag;
use crate::shared::errors::CreateError;
use crate::shared::multipart_form::SubmittedForm;
use crate::shared::state::AppState;

/// GET /api/tag
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, StatusCode> {
    match a002_tag::service::list_all(&state).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list tags: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/tag/options
pub async fn list_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<SelectOption>>, StatusCode> {
    let tags = list_all(State(state)).await?;
    Ok(Json(tags.iter().map(Tag::to_option).collect()))
}

/// POST /api/tag
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CreateResponse>, CreateError> {
    let form = SubmittedForm::read(&mut multipart).await?;
    let tag = a002_tag::service::create_from_form(&state, &form).await?;
    Ok(Json(CreateResponse::created(&tag)?))
}
