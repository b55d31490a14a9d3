use super::repository;
use crate::domain::{a001_customer, a002_tag};
use crate::shared::errors::CreateError;
use crate::shared::state::AppState;
use contracts::domain::a003_memo::aggregate::{Memo, MemoDto, TITLE_RULES};
use contracts::shared::inline_create::{push_field_error, FieldErrors};

/// Создание служебной записки; ссылки на контрагента и теги должны существовать
pub async fn create(state: &AppState, mut dto: MemoDto) -> Result<Memo, CreateError> {
    dto.title = dto.title.trim().to_string();
    let mut errors = FieldErrors::new();
    TITLE_RULES.check(&mut errors, "title", Some(dto.title.as_str()));

    if let Some(customer_id) = dto.customer_id {
        if !a001_customer::repository::exists(&state.db, customer_id).await? {
            push_field_error(
                &mut errors,
                "customerId",
                format!("Select a valid choice. {customer_id} is not one of the available choices."),
            );
        }
    }

    dto.tag_ids.sort_unstable();
    dto.tag_ids.dedup();
    for missing in a002_tag::repository::missing_ids(&state.db, &dto.tag_ids).await? {
        push_field_error(
            &mut errors,
            "tagIds",
            format!("Select a valid choice. {missing} is not one of the available choices."),
        );
    }

    if !errors.is_empty() {
        return Err(CreateError::Invalid(errors));
    }

    let memo = repository::insert(&state.db, dto).await?;
    tracing::info!("Memo {} '{}' created", memo.id, memo.title);
    Ok(memo)
}

pub async fn list_all(state: &AppState) -> anyhow::Result<Vec<Memo>> {
    Ok(repository::list_all(&state.db).await?)
}
