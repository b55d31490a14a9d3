use contracts::shared::inline_create::SelectOption;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Single- or multi-value `<select>` with label support.
///
/// `searchable` adds a search box filtering the options by label; a
/// multi-value select also shows its selection as removable chips.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Selected values (at most one for a single-value select)
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Called with the selection reported by the element
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// `multiple` attribute
    #[prop(optional)]
    multiple: bool,
    /// Text of the empty option of a single-value select
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Show a search box above the options
    #[prop(optional)]
    searchable: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let query = RwSignal::new(String::new());
    let visible_options = Signal::derive(move || {
        let query = query.get();
        options.with(|all| selected.with(|sel| filter_options(all, sel, &query)))
    });

    let remove = move |value: String| {
        if let Some(handler) = on_change {
            let rest = selected.with_untracked(|s| {
                s.iter().filter(|v| **v != value).cloned().collect::<Vec<_>>()
            });
            handler.run(rest);
        }
    };

    let chips = move || {
        selected
            .get()
            .into_iter()
            .map(|value| {
                let label = options.with(|all| {
                    all.iter()
                        .find(|o| o.value == value)
                        .map(|o| o.label.clone())
                        .unwrap_or_else(|| value.clone())
                });
                view! {
                    <span class="select-chip">
                        {label}
                        <button
                            type="button"
                            class="select-chip__remove"
                            aria-label="Remove"
                            disabled=move || disabled.get().unwrap_or(false)
                            on:click=move |_| remove(value.clone())
                        >
                            "×"
                        </button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            {searchable.then(|| view! {
                <input
                    type="search"
                    class="form__input form__search"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    disabled=move || disabled.get().unwrap_or(false)
                />
            })}
            {multiple.then(|| view! { <div class="select-chips">{chips}</div> })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                multiple=multiple
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(selected_values(&ev));
                    }
                }
            >
                {(!multiple).then(|| view! {
                    <option value="" selected=move || selected.with(|s| s.is_empty())>
                        {move || placeholder.get().unwrap_or_else(|| "Select...".to_string())}
                    </option>
                })}
                <For
                    each=move || visible_options.get()
                    key=|option| (option.value.clone(), option.label.clone())
                    children=move |option| {
                        let value = option.value.clone();
                        let is_selected = move || selected.with(|s| s.contains(&value));
                        view! {
                            <option value=option.value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Values of all selected `<option>`s, empty values skipped.
fn selected_values(ev: &leptos::ev::Event) -> Vec<String> {
    let select: web_sys::HtmlSelectElement = event_target(ev);
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|option| option.value())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Options whose label contains `query` (case-insensitive). Selected options
/// are always kept so filtering never drops the current selection.
pub fn filter_options(options: &[SelectOption], selected: &[String], query: &str) -> Vec<SelectOption> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| {
            query.is_empty()
                || selected.contains(&o.value)
                || o.label.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Acme"),
            SelectOption::new("2", "Globex"),
            SelectOption::new("3", "Initech"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_options(&customers(), &[], "  "), customers());
    }

    #[test]
    fn test_query_matches_label_ignoring_case() {
        let found = filter_options(&customers(), &[], "GLO");
        assert_eq!(found, vec![SelectOption::new("2", "Globex")]);
    }

    #[test]
    fn test_selected_options_survive_filtering() {
        let found = filter_options(&customers(), &["3".to_string()], "acme");
        let values: Vec<_> = found.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["1", "3"]);
    }

    #[test]
    fn test_query_does_not_match_values() {
        assert!(filter_options(&customers(), &[], "2").is_empty());
    }
}
