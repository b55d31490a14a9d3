use super::dialog::{CreateDialog, DialogId};
use super::field::SelectField;
use super::form::{CreateForm, FieldKind, FileUpload, FormFieldSpec};
use super::session::InlineCreateSession;
use super::widgets::{SignalDialog, SignalForm, SignalSelect};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use std::sync::Arc;

/// Select field with an "Add New" button opening a create dialog.
///
/// The dialog form is posted to `target_url`; the created record becomes a
/// new selected option of `field`.
#[component]
pub fn InlineCreateSelect(
    field: RwSignal<SelectField>,
    #[prop(into)] label: String,
    #[prop(into)] dialog_title: String,
    /// Create endpoint, e.g. `api_url("/api/customer")`
    #[prop(into)]
    target_url: String,
    form_fields: &'static [FormFieldSpec],
    /// Called with the selected values after every change
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
) -> impl IntoView {
    let session = use_context::<InlineCreateSession>()
        .expect("InlineCreateSession not found. Provide it in App.");

    let field_id = field.with_untracked(|f| f.id().clone());
    let multiple = field.with_untracked(SelectField::is_multiple);
    let visible = RwSignal::new(false);
    let form = RwSignal::new(CreateForm::new(form_fields));
    let busy = RwSignal::new(false);

    let dialog = CreateDialog::new(
        DialogId::new(format!("{field_id}-create-dialog")),
        dialog_title.clone(),
        target_url,
        Arc::new(SignalDialog { visible }),
        Arc::new(SignalForm { form }),
    );
    session.bind_create_dialog(Arc::new(SignalSelect::new(field, on_change)), dialog);

    on_cleanup({
        let session = session.clone();
        let field_id = field_id.clone();
        move || {
            session.unbind(&field_id);
        }
    });

    let open = {
        let session = session.clone();
        let field_id = field_id.clone();
        Callback::new(move |_: ev::MouseEvent| {
            // BindingMissing is logged by the session
            let _ = session.open_dialog(&field_id);
        })
    };

    let close = {
        let session = session.clone();
        let field_id = field_id.clone();
        Callback::new(move |_: ()| session.close_dialog(&field_id))
    };

    let submit = {
        let field_id = field_id.clone();
        Callback::new(move |_: ()| {
            let session = session.clone();
            let field_id = field_id.clone();
            busy.set(true);
            spawn_local(async move {
                // Outcome is applied (or alerted) by the session itself
                let _ = session.submit(&field_id).await;
                busy.set(session.is_busy(&field_id));
            });
        })
    };

    let change = Callback::new(move |values: Vec<String>| {
        field.update(|f| f.set_selection(&values));
        if let Some(on_change) = on_change {
            on_change.run(values);
        }
    });

    let button_title = dialog_title.clone();

    view! {
        <div class="inline-create">
            <div class="inline-create__row">
                <Select
                    label=label
                    id=field_id.to_string()
                    multiple=multiple
                    searchable=true
                    options=Signal::derive(move || field.with(|f| f.options().to_vec()))
                    selected=Signal::derive(move || field.with(|f| f.selected_values().to_vec()))
                    on_change=change
                />
                <Button variant="secondary" size="sm" title=button_title on_click=open>
                    "Add New"
                </Button>
            </div>
            <Show when=move || visible.get()>
                <CreateDialogView
                    title=dialog_title.clone()
                    form=form
                    busy=busy
                    on_submit=submit
                    on_cancel=close
                />
            </Show>
        </div>
    }
}

/// Modal with the create form, rendered from the form's field schema.
#[component]
pub fn CreateDialogView(
    #[prop(into)] title: String,
    form: RwSignal<CreateForm>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let specs = form.with_untracked(|f| f.specs().to_vec());

    let fields = specs
        .into_iter()
        .map(|spec| render_field(spec, form, busy))
        .collect_view();

    view! {
        <ModalFrame on_close=on_cancel title=title modal_class="inline-create__dialog".to_string()>
            <form
                class="form"
                on:submit=move |ev: ev::SubmitEvent| {
                    let ev: &web_sys::Event = &ev;
                    intercept_submit(ev, busy.get_untracked(), || on_submit.run(()));
                }
            >
                {fields}
                <div class="modal-footer">
                    <Button variant="ghost" on_click=Callback::new(move |_: ev::MouseEvent| on_cancel.run(()))>
                        "Cancel"
                    </Button>
                    <Button button_type="submit" disabled=busy>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </form>
        </ModalFrame>
    }
}

/// Submit event of the dialog form, as far as the dialog handles it.
pub trait InterceptedSubmit {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

impl InterceptedSubmit for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }
}

/// Keeps the dialog submission to the dialog: no navigation, and the host
/// page's own `<form>` (the dialog may be rendered inside it) never sees it.
pub fn intercept_submit(ev: &impl InterceptedSubmit, busy: bool, on_submit: impl FnOnce()) {
    ev.prevent_default();
    ev.stop_propagation();
    if !busy {
        on_submit();
    }
}

fn render_field(spec: FormFieldSpec, form: RwSignal<CreateForm>, busy: Signal<bool>) -> AnyView {
    let name = spec.name;
    let value = Signal::derive(move || form.with(|f| f.text(name).to_string()));
    let on_input = Callback::new(move |text: String| {
        form.update(|f| {
            f.set_text(name, text);
        })
    });

    match spec.kind {
        FieldKind::Textarea => view! {
            <Textarea
                label=spec.label
                name=name
                value=value
                on_input=on_input
                disabled=busy
                required=spec.required
            />
        }
        .into_any(),
        FieldKind::File { accept } => view! {
            <FileInput spec=spec accept=accept form=form busy=busy />
        }
        .into_any(),
        kind => view! {
            <Input
                label=spec.label
                name=name
                input_type=kind.input_type()
                value=value
                on_input=on_input
                disabled=busy
                required=spec.required
            />
        }
        .into_any(),
    }
}

/// `<input type="file">`; the picked file is read into the form right away.
#[component]
fn FileInput(
    spec: FormFieldSpec,
    accept: &'static str,
    form: RwSignal<CreateForm>,
    busy: Signal<bool>,
) -> impl IntoView {
    let name = spec.name;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // После reset() формы очищаем и сам элемент
    Effect::new(move |_| {
        let empty = form.with(|f| f.file(name).is_none());
        if let (true, Some(input)) = (empty, input_ref.get()) {
            input.set_value("");
        }
    });

    let on_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            form.update(|f| {
                f.set_file(name, None);
            });
            return;
        };
        spawn_local(async move {
            match read_file(&file).await {
                Ok(upload) => form.update(|f| {
                    f.set_file(name, Some(upload));
                }),
                Err(e) => log::error!("failed to read {}: {}", file.name(), e),
            }
        });
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            <input
                node_ref=input_ref
                id=name
                name=name
                class="form__input"
                type="file"
                accept=accept
                required=spec.required
                disabled=move || busy.get()
                on:change=on_change
            />
        </div>
    }
}

async fn read_file(file: &web_sys::File) -> Result<FileUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(FileUpload {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeSubmit {
        default_prevented: Cell<bool>,
        propagation_stopped: Cell<bool>,
    }

    impl InterceptedSubmit for FakeSubmit {
        fn prevent_default(&self) {
            self.default_prevented.set(true);
        }

        fn stop_propagation(&self) {
            self.propagation_stopped.set(true);
        }
    }

    /// Dialog form nested in a host form: the event bubbles to the host
    /// handler unless propagation was stopped.
    fn dispatch(ev: &FakeSubmit, busy: bool, dialog_saves: &Cell<u32>, host_saves: &Cell<u32>) {
        intercept_submit(ev, busy, || dialog_saves.set(dialog_saves.get() + 1));
        if !ev.propagation_stopped.get() {
            host_saves.set(host_saves.get() + 1);
        }
    }

    #[test]
    fn test_dialog_submit_does_not_reach_host_form() {
        let ev = FakeSubmit::default();
        let dialog_saves = Cell::new(0);
        let host_saves = Cell::new(0);

        dispatch(&ev, false, &dialog_saves, &host_saves);

        assert!(ev.default_prevented.get());
        assert_eq!(dialog_saves.get(), 1);
        assert_eq!(host_saves.get(), 0);
    }

    #[test]
    fn test_busy_dialog_swallows_submit() {
        let ev = FakeSubmit::default();
        let dialog_saves = Cell::new(0);
        let host_saves = Cell::new(0);

        dispatch(&ev, true, &dialog_saves, &host_saves);

        assert!(ev.default_prevented.get());
        assert_eq!(dialog_saves.get(), 0);
        assert_eq!(host_saves.get(), 0);
    }
}
