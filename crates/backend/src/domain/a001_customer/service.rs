use super::repository::{self, NewCustomer};
use crate::shared::errors::CreateError;
use crate::shared::multipart_form::SubmittedForm;
use crate::shared::state::AppState;
use contracts::domain::a001_customer::aggregate::{
    looks_like_email, Customer, EMAIL_RULES, NAME_RULES, PHONE_RULES,
};
use contracts::shared::inline_create::{push_field_error, FieldErrors};

/// Validates the dialog form.
pub fn validate(form: &SubmittedForm, max_file_size: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();

    NAME_RULES.check(&mut errors, "name", form.text("name"));
    EMAIL_RULES.check(&mut errors, "email", form.text("email"));
    PHONE_RULES.check(&mut errors, "phone", form.text("phone"));

    if let Some(email) = form.text("email") {
        if !looks_like_email(email) {
            push_field_error(&mut errors, "email", "Enter a valid email address.");
        }
    }

    if let Some(logo) = form.file("logo") {
        let is_image = logo
            .content_type
            .as_deref()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            push_field_error(
                &mut errors,
                "logo",
                "Upload a valid image. The file you uploaded was either not an image or a corrupted image.",
            );
        }
        if logo.len() > max_file_size {
            push_field_error(
                &mut errors,
                "logo",
                format!("File is too large ({} bytes, max {}).", logo.len(), max_file_size),
            );
        }
    }

    errors
}

/// Создание контрагента из формы диалога
pub async fn create_from_form(
    state: &AppState,
    form: &SubmittedForm,
) -> Result<Customer, CreateError> {
    let errors = validate(form, state.uploads.max_file_size());
    if !errors.is_empty() {
        return Err(CreateError::Invalid(errors));
    }

    let logo_path = match form.file("logo") {
        Some(file) => Some(state.uploads.save(file).await?),
        None => None,
    };

    let inserted = repository::insert(
        &state.db,
        NewCustomer {
            name: form.text("name").unwrap_or_default().to_string(),
            email: form.text("email").map(str::to_string),
            phone: form.text("phone").map(str::to_string),
            logo_path: logo_path.clone(),
        },
    )
    .await;

    let customer = match (inserted, logo_path) {
        (Ok(customer), _) => customer,
        (Err(e), Some(stored)) => {
            // Файл без записи никому не нужен
            if let Err(io) = state.uploads.remove(&stored).await {
                tracing::warn!("Failed to remove orphan upload {}: {}", stored, io);
            }
            return Err(e.into());
        }
        (Err(e), None) => return Err(e.into()),
    };

    tracing::info!("Customer {} '{}' created", customer.id, customer.name);
    Ok(customer)
}

pub async fn list_all(state: &AppState) -> anyhow::Result<Vec<Customer>> {
    Ok(repository::list_all(&state.db).await?)
}
