use crate::shared::api_utils::api_url;
use contracts::domain::a003_memo::aggregate::{Memo, MemoDto};
use contracts::shared::inline_create::{CreateResponse, InlineCreateError};
use gloo_net::http::Request;

pub async fn fetch_all() -> Result<Vec<Memo>, String> {
    let response = Request::get(&api_url("/api/memo"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch memos: {}", response.status()));
    }

    response
        .json::<Vec<Memo>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Posts the memo; server-side validation errors come back as the user message.
pub async fn save(dto: &MemoDto) -> Result<Memo, String> {
    let response = Request::post(&api_url("/api/memo"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let envelope: CreateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !envelope.success || !response.ok() {
        let error = InlineCreateError::RequestFailed {
            status: Some(status),
            message: envelope.message.unwrap_or_else(|| format!("HTTP {status}")),
            errors: envelope.errors,
        };
        return Err(error.user_message());
    }

    let result = envelope.result.ok_or("Empty response")?;
    serde_json::from_value(result).map_err(|e| format!("Failed to parse memo: {}", e))
}
