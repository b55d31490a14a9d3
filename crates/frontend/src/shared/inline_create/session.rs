use super::dialog::{CreateDialog, DialogId};
use super::field::{FieldId, SelectWidget};
use super::notifier::Notifier;
use super::transport::SubmitTransport;
use contracts::shared::inline_create::{
    interpret_response, InlineCreateError, SelectOption, SubmissionResult,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Result of [`InlineCreateSession::bind_create_dialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    /// The same dialog was already bound to the field
    Unchanged,
    /// Another dialog was bound before and has been dropped
    Replaced(DialogId),
}

struct Binding {
    field: Arc<dyn SelectWidget>,
    dialog: CreateDialog,
}

struct ActiveDialog {
    field: FieldId,
    dialog: CreateDialog,
}

#[derive(Default)]
struct SessionState {
    bindings: HashMap<FieldId, Binding>,
    active: Option<ActiveDialog>,
    in_flight: HashSet<DialogId>,
}

impl SessionState {
    /// Hides the active dialog when it belongs to `field`.
    fn deactivate(&mut self, field: &FieldId) {
        if self.active.as_ref().is_some_and(|a| &a.field == field) {
            if let Some(active) = self.active.take() {
                active.dialog.widget.hide();
            }
        }
    }
}

/// Registry of "Add New" dialogs on the current page.
///
/// Holds the `field -> dialog` bindings, the single active dialog and the
/// dialogs with a request on the wire. Cheap to clone, shared via context.
#[derive(Clone)]
pub struct InlineCreateSession {
    state: Arc<Mutex<SessionState>>,
    transport: Arc<dyn SubmitTransport>,
    notifier: Arc<dyn Notifier>,
}

impl InlineCreateSession {
    pub fn new(transport: Arc<dyn SubmitTransport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            transport,
            notifier,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Associates `dialog` with `field`. After this the dialog form submit
    /// goes through [`submit`](Self::submit) for that field.
    pub fn bind_create_dialog(
        &self,
        field: Arc<dyn SelectWidget>,
        dialog: CreateDialog,
    ) -> BindOutcome {
        let field_id = field.field_id();
        let mut state = self.lock();

        let previous = match state.bindings.get(&field_id) {
            Some(existing) if existing.dialog.id == dialog.id => {
                log::debug!("inline-create: {} already bound to {}", field_id, dialog.id);
                return BindOutcome::Unchanged;
            }
            Some(existing) => Some(existing.dialog.id.clone()),
            None => None,
        };

        if previous.is_some() {
            state.deactivate(&field_id);
        }
        log::debug!("inline-create: bind {} -> {}", field_id, dialog.id);
        state
            .bindings
            .insert(field_id, Binding { field, dialog });

        match previous {
            Some(old) => BindOutcome::Replaced(old),
            None => BindOutcome::Bound,
        }
    }

    /// Drops the binding of `field`, hiding its dialog if it was open.
    pub fn unbind(&self, field: &FieldId) -> bool {
        let mut state = self.lock();
        state.deactivate(field);
        state.bindings.remove(field).is_some()
    }

    pub fn is_bound(&self, field: &FieldId) -> bool {
        self.lock().bindings.contains_key(field)
    }

    /// Shows the dialog bound to `field`. Any other open dialog is hidden first.
    pub fn open_dialog(&self, field: &FieldId) -> Result<CreateDialog, InlineCreateError> {
        let mut guard = self.lock();
        let state = &mut *guard;

        let Some(binding) = state.bindings.get(field) else {
            let err = InlineCreateError::BindingMissing(field.to_string());
            log::error!("inline-create: {err}");
            return Err(err);
        };
        let dialog = binding.dialog.clone();

        if let Some(active) = state.active.take() {
            if active.dialog.id != dialog.id {
                active.dialog.widget.hide();
            }
        }
        dialog.widget.show();
        state.active = Some(ActiveDialog {
            field: field.clone(),
            dialog: dialog.clone(),
        });
        log::debug!("inline-create: open {} for {}", dialog.id, field);
        Ok(dialog)
    }

    /// Hides the dialog of `field`; form values stay as entered.
    pub fn close_dialog(&self, field: &FieldId) {
        let mut state = self.lock();
        if let Some(binding) = state.bindings.get(field) {
            binding.dialog.widget.hide();
        }
        if state.active.as_ref().is_some_and(|a| &a.field == field) {
            state.active = None;
        }
    }

    /// Field whose dialog is currently open.
    pub fn active_field(&self) -> Option<FieldId> {
        self.lock().active.as_ref().map(|a| a.field.clone())
    }

    /// `true` while a create request of the dialog bound to `field` is pending.
    pub fn is_busy(&self, field: &FieldId) -> bool {
        let state = self.lock();
        state
            .bindings
            .get(field)
            .is_some_and(|b| state.in_flight.contains(&b.dialog.id))
    }

    /// Posts the dialog form of `field` and applies the answer.
    ///
    /// `Err` is returned only for local precondition failures (no binding,
    /// request already pending); server outcomes come back as
    /// [`SubmissionResult`]. On success the form is reset, the dialog is
    /// hidden and the new record is appended to the field as selected. On
    /// failure nothing changes and the user is notified.
    pub async fn submit(&self, field_id: &FieldId) -> Result<SubmissionResult, InlineCreateError> {
        let (field, dialog) = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let Some(binding) = state.bindings.get(field_id) else {
                let err = InlineCreateError::BindingMissing(field_id.to_string());
                log::error!("inline-create: {err}");
                return Err(err);
            };
            if !state.in_flight.insert(binding.dialog.id.clone()) {
                let err = InlineCreateError::SubmissionInFlight(field_id.to_string());
                log::warn!("inline-create: {err}");
                return Err(err);
            }
            (binding.field.clone(), binding.dialog.clone())
        };

        let payload = dialog.form.payload();
        log::debug!(
            "inline-create: POST {} ({} parts)",
            dialog.target_url,
            payload.parts.len()
        );
        let response = self.transport.post_form(&dialog.target_url, &payload).await;

        self.lock().in_flight.remove(&dialog.id);

        let result = match response {
            Ok(response) => interpret_response(response.status, &response.body),
            Err(e) => InlineCreateError::transport(e).into(),
        };

        match &result {
            SubmissionResult::Success { id, label } => {
                dialog.form.reset();
                dialog.widget.hide();
                {
                    let mut state = self.lock();
                    if state.active.as_ref().is_some_and(|a| a.dialog.id == dialog.id) {
                        state.active = None;
                    }
                }
                field.append_selected(SelectOption::new(id.as_str(), label.as_str()));
                log::debug!("inline-create: {} <- {} ({})", field_id, id, label);
            }
            SubmissionResult::Failure { error } => {
                log::error!("inline-create: {} failed: {}", dialog.target_url, error);
                self.notifier.notify(&error.user_message());
            }
        }
        Ok(result)
    }
}
