use axum::{extract::Multipart, extract::State, http::StatusCode, Json};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::shared::inline_create::{CreateResponse, SelectOption};

use crate::domain::a001_customer;
use crate::shared::errors::CreateError;
use crate::shared::multipart_form::SubmittedForm;
use crate::shared::state::AppState;

/// GET /api/customer
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, StatusCode> {
    match a001_customer::service::list_all(&state).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list customers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/customer/options
pub async fn list_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<SelectOption>>, StatusCode> {
    let customers = list_all(State(state)).await?;
    Ok(Json(customers.iter().map(Customer::to_option).collect()))
}

/// POST /api/customer (multipart/form-data from the "Add New" dialog)
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CreateResponse>, CreateError> {
    let form = SubmittedForm::read(&mut multipart)
        .await
        .map_err(|e| e.too_large_on("logo"))?;
    let customer = a001_customer::service::create_from_form(&state, &form).await?;
    Ok(Json(CreateResponse::created(&customer)?))
}
