use super::model;
use crate::domain::{a001_customer, a002_tag};
use crate::shared::inline_create::SelectField;
use contracts::domain::a003_memo::aggregate::{Memo, MemoDto, TITLE_RULES};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct MemoDetailsViewModel {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub customer: RwSignal<SelectField>,
    pub tags: RwSignal<SelectField>,
    pub memos: RwSignal<Vec<Memo>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl MemoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            customer: RwSignal::new(a001_customer::ui::select_field("memo-customer")),
            tags: RwSignal::new(a002_tag::ui::select_field("memo-tags")),
            memos: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Loads select options and the saved memos.
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match a001_customer::ui::fetch_options().await {
                Ok(options) => vm.customer.update(|f| f.replace_options(options)),
                Err(e) => vm.error.set(Some(e)),
            }
            match a002_tag::ui::fetch_options().await {
                Ok(options) => vm.tags.update(|f| f.replace_options(options)),
                Err(e) => vm.error.set(Some(e)),
            }
            vm.reload_memos().await;
        });
    }

    async fn reload_memos(&self) {
        match model::fetch_all().await {
            Ok(memos) => self.memos.set(memos),
            Err(e) => self.error.set(Some(e)),
        }
    }

    pub fn save_command(&self) {
        let dto = match build_dto(
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.customer.get_untracked(),
            &self.tags.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match model::save(&dto).await {
                Ok(memo) => {
                    log::debug!("memo {} saved", memo.id);
                    vm.title.set(String::new());
                    vm.description.set(String::new());
                    vm.customer.update(|f| f.set_selection(Vec::<String>::new()));
                    vm.tags.update(|f| f.set_selection(Vec::<String>::new()));
                    vm.reload_memos().await;
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.saving.set(false);
        });
    }
}

impl Default for MemoDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Memo payload from the form state. Select values are record ids.
fn build_dto(
    title: &str,
    description: &str,
    customer: &SelectField,
    tags: &SelectField,
) -> Result<MemoDto, String> {
    if let Err(message) = TITLE_RULES.validate_string(title) {
        return Err(format!("Title: {message}"));
    }

    let customer_id = customer
        .value()
        .map(|v| v.parse::<i32>().map_err(|_| format!("Unknown customer `{v}`")))
        .transpose()?;
    let tag_ids = tags
        .selected_values()
        .iter()
        .map(|v| v.parse::<i32>().map_err(|_| format!("Unknown tag `{v}`")))
        .collect::<Result<Vec<_>, _>>()?;

    let description = description.trim();
    Ok(MemoDto {
        title: title.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        customer_id,
        tag_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::inline_create::SelectOption;

    fn customers() -> SelectField {
        SelectField::single("customer").with_options([
            SelectOption::new("1", "Acme"),
            SelectOption::new("2", "Beta Corp"),
        ])
    }

    fn tags() -> SelectField {
        SelectField::multiple("tags").with_options([
            SelectOption::new("1", "Urgent"),
            SelectOption::new("4", "Later"),
        ])
    }

    #[test]
    fn test_build_dto_collects_selected_ids() {
        let mut customer = customers();
        customer.select("2");
        let mut tags = tags();
        tags.set_selection(["1", "4"]);

        let dto = build_dto(" Review ", "", &customer, &tags).unwrap();
        assert_eq!(
            dto,
            MemoDto {
                title: "Review".into(),
                description: None,
                customer_id: Some(2),
                tag_ids: vec![1, 4],
            }
        );
    }

    #[test]
    fn test_build_dto_requires_title() {
        let err = build_dto("  ", "text", &customers(), &tags()).unwrap_err();
        assert_eq!(err, "Title: This field is required.");
    }

    #[test]
    fn test_build_dto_rejects_non_numeric_ids() {
        let mut customer = SelectField::single("customer")
            .with_options([SelectOption::new("abc", "Broken")]);
        customer.select("abc");
        let err = build_dto("Review", "", &customer, &tags()).unwrap_err();
        assert!(err.contains("abc"));
    }
}
