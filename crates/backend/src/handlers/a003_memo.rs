use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a003_memo::aggregate::{Memo, MemoDto};
use contracts::shared::inline_create::CreateResponse;

use crate::domain::a003_memo;
use crate::shared::errors::CreateError;
use crate::shared::state::AppState;

/// GET /api/memo
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Memo>>, StatusCode> {
    match a003_memo::service::list_all(&state).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list memos: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/memo
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<MemoDto>,
) -> Result<Json<CreateResponse>, CreateError> {
    let memo = a003_memo::service::create(&state, dto).await?;
    Ok(Json(CreateResponse::created(&memo)?))
}
