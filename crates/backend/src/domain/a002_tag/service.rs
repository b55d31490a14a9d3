use super::repository;
use crate::shared::errors::CreateError;
use crate::shared::multipart_form::SubmittedForm;
use crate::shared::state::AppState;
use contracts::domain::a002_tag::aggregate::{is_hex_color, Tag, NAME_RULES};
use contracts::shared::inline_create::{push_field_error, FieldErrors};
use sea_orm::{DbErr, SqlErr};

const DUPLICATE_NAME: &str = "Tag with this name already exists.";

/// Checks that do not need the database.
pub fn validate(form: &SubmittedForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    NAME_RULES.check(&mut errors, "name", form.text("name"));

    if let Some(color) = form.text("color") {
        if !is_hex_color(color) {
            push_field_error(&mut errors, "color", "Enter a color as #rrggbb.");
        }
    }

    errors
}

pub async fn create_from_form(state: &AppState, form: &SubmittedForm) -> Result<Tag, CreateError> {
    let mut errors = validate(form);

    if let Some(name) = form.text("name") {
        if repository::find_by_name(&state.db, name).await?.is_some() {
            push_field_error(&mut errors, "name", DUPLICATE_NAME);
        }
    }

    if !errors.is_empty() {
        return Err(CreateError::Invalid(errors));
    }

    // The lookup above races with concurrent creates; the unique index decides
    let tag = repository::insert(
        &state.db,
        form.text("name").unwrap_or_default().to_string(),
        form.text("color").map(|c| c.to_ascii_lowercase()),
    )
    .await
    .map_err(duplicate_name_error)?;

    tracing::info!("Tag {} '{}' created", tag.id, tag.name);
    Ok(tag)
}

fn duplicate_name_error(e: DbErr) -> CreateError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            let mut errors = FieldErrors::new();
            push_field_error(&mut errors, "name", DUPLICATE_NAME);
            CreateError::Invalid(errors)
        }
        _ => CreateError::Database(e),
    }
}

pub async fn list_all(state: &AppState) -> anyhow::Result<Vec<Tag>> {
    Ok(repository::list_all(&state.db).await?)
}
