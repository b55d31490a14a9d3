//! Customer select with inline creation.

use crate::shared::api_utils::api_url;
use crate::shared::inline_create::{FieldKind, FormFieldSpec, SelectField};
use contracts::shared::inline_create::SelectOption;
use gloo_net::http::Request;

/// Fields of the "New customer" dialog, in the order the backend reads them.
pub const CREATE_FORM: &[FormFieldSpec] = &[
    FormFieldSpec::text("name", "Name").required(),
    FormFieldSpec::text("email", "Email").with_kind(FieldKind::Email),
    FormFieldSpec::text("phone", "Phone").with_kind(FieldKind::Tel),
    FormFieldSpec::text("logo", "Logo").with_kind(FieldKind::File { accept: "image/*" }),
];

pub fn create_url() -> String {
    api_url("/api/customer")
}

/// Single-value select named `id`.
pub fn select_field(id: &str) -> SelectField {
    SelectField::single(id)
}

pub async fn fetch_options() -> Result<Vec<SelectOption>, String> {
    let response = Request::get(&api_url("/api/customer/options"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customers: {}", response.status()));
    }

    response
        .json::<Vec<SelectOption>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
