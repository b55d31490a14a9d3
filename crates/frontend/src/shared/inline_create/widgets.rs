//! Leptos adapters of the workflow collaborators.

use super::dialog::DialogWidget;
use super::field::{FieldId, SelectField, SelectWidget};
use super::form::{CreateForm, FormHandle, FormPayload};
use contracts::shared::inline_create::SelectOption;
use leptos::prelude::*;

/// [`SelectWidget`] over a reactive [`SelectField`].
#[derive(Clone, Copy)]
pub struct SignalSelect {
    pub field: RwSignal<SelectField>,
    on_change: Option<Callback<Vec<String>>>,
}

impl SignalSelect {
    pub fn new(field: RwSignal<SelectField>, on_change: Option<Callback<Vec<String>>>) -> Self {
        Self { field, on_change }
    }

    fn changed(&self) {
        if let Some(on_change) = self.on_change {
            on_change.run(self.field.with_untracked(|f| f.selected_values().to_vec()));
        }
    }
}

impl SelectWidget for SignalSelect {
    fn field_id(&self) -> FieldId {
        self.field.with_untracked(|f| f.id().clone())
    }

    fn options(&self) -> Vec<SelectOption> {
        self.field.with_untracked(|f| f.options().to_vec())
    }

    fn is_multiple(&self) -> bool {
        self.field.with_untracked(SelectField::is_multiple)
    }

    fn append_selected(&self, option: SelectOption) {
        self.field.update(|f| f.append_selected(option));
        self.changed();
    }
}

#[derive(Clone, Copy)]
pub struct SignalDialog {
    pub visible: RwSignal<bool>,
}

impl DialogWidget for SignalDialog {
    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn is_visible(&self) -> bool {
        self.visible.get_untracked()
    }
}

#[derive(Clone, Copy)]
pub struct SignalForm {
    pub form: RwSignal<CreateForm>,
}

impl FormHandle for SignalForm {
    fn payload(&self) -> FormPayload {
        self.form.with_untracked(CreateForm::payload)
    }

    fn reset(&self) {
        self.form.update(CreateForm::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inline_create::form::FormFieldSpec;
    use std::sync::{Arc, Mutex};

    const FORM: &[FormFieldSpec] = &[FormFieldSpec::text("name", "Name").required()];

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_append_selected_notifies_observers() {
        with_owner(|| {
            let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::default();
            let on_change = Callback::new({
                let seen = seen.clone();
                move |values: Vec<String>| seen.lock().unwrap().push(values)
            });
            let field = RwSignal::new(
                SelectField::multiple("tags").with_options([SelectOption::new("1", "Urgent")]),
            );
            field.update(|f| {
                f.select("1");
            });
            let select = SignalSelect::new(field, Some(on_change));

            select.append_selected(SelectOption::new("7", "Later"));

            assert_eq!(
                *seen.lock().unwrap(),
                vec![vec!["1".to_string(), "7".to_string()]]
            );
            assert!(field.with_untracked(|f| f.has_option("7")));
            assert_eq!(select.options().len(), 2);
        });
    }

    #[test]
    fn test_append_selected_without_observer() {
        with_owner(|| {
            let field = RwSignal::new(SelectField::single("customer"));
            let select = SignalSelect::new(field, None);

            select.append_selected(SelectOption::new("3", "Acme"));

            assert_eq!(field.with_untracked(|f| f.value().map(str::to_string)), Some("3".into()));
            assert_eq!(select.field_id(), FieldId::new("customer"));
            assert!(!select.is_multiple());
        });
    }

    #[test]
    fn test_signal_dialog_toggles_visibility() {
        with_owner(|| {
            let dialog = SignalDialog {
                visible: RwSignal::new(false),
            };
            assert!(!dialog.is_visible());
            dialog.show();
            assert!(dialog.is_visible());
            assert!(dialog.visible.get_untracked());
            dialog.hide();
            assert!(!dialog.is_visible());
        });
    }

    #[test]
    fn test_signal_form_reset_clears_signal() {
        with_owner(|| {
            let form = RwSignal::new(CreateForm::new(FORM));
            form.update(|f| {
                f.set_text("name", "Acme");
            });
            let handle = SignalForm { form };
            assert_eq!(handle.payload().text("name"), Some("Acme"));

            handle.reset();

            assert!(form.with_untracked(CreateForm::is_empty));
            assert_eq!(handle.payload().text("name"), Some(""));
        });
    }
}
