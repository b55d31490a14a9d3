use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface + optional title bar).
///
/// Action buttons belong to the content: dialog forms render their own footer.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, close button).
    on_close: Callback<()>,
    /// Title shown in the header; no header when empty.
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем только если и нажатие, и отпускание были на самом оверлее
    // (выделение текста внутри модалки не должно её закрывать)
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer to the next tick: the overlay is removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = modal_class
        .map(|cls| format!("modal {cls}"))
        .unwrap_or_else(|| "modal".to_string());

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                style="position: relative;"
                role="dialog"
                aria-modal="true"
                on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
            >
                {move || title.get().filter(|t| !t.is_empty()).map(|t| view! {
                    <div class="modal-header">
                        <h3 class="modal-title">{t}</h3>
                        <button
                            type="button"
                            class="button button--ghost modal-close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                })}
                {children()}
            </div>
        </div>
    }
}
