use leptos::prelude::*;

/// Labelled `<textarea>` bound to a string signal
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// `name` attribute, also used as the id
    #[prop(optional, into)]
    name: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    /// Rows attribute (default: 3)
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_id = move || name.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <textarea
                id=textarea_id
                name=textarea_id
                class="form__textarea"
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
