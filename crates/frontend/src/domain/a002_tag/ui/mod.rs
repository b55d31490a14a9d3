//! Tag multi-select with inline creation.

use crate::shared::api_utils::api_url;
use crate::shared::inline_create::{FieldKind, FormFieldSpec, SelectField};
use contracts::shared::inline_create::SelectOption;
use gloo_net::http::Request;

pub const CREATE_FORM: &[FormFieldSpec] = &[
    FormFieldSpec::text("name", "Name").required(),
    FormFieldSpec::text("color", "Color").with_kind(FieldKind::Color),
];

pub fn create_url() -> String {
    api_url("/api/tag")
}

pub fn select_field(id: &str) -> SelectField {
    SelectField::multiple(id)
}

pub async fn fetch_options() -> Result<Vec<SelectOption>, String> {
    let response = Request::get(&api_url("/api/tag/options"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch tags: {}", response.status()));
    }

    response
        .json::<Vec<SelectOption>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
