use leptos::prelude::*;

/// Button with variants (primary, secondary, ghost) and sizes (sm, md)
#[component]
pub fn Button(
    /// "primary" (default), "secondary" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// `type` attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = match variant.get().as_deref().unwrap_or("primary") {
            "secondary" => "button--secondary",
            "ghost" => "button--ghost",
            _ => "button--primary",
        };
        let size = if size.get().as_deref() == Some("sm") {
            " button--small"
        } else {
            ""
        };
        format!("button {variant}{size}")
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=class
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
