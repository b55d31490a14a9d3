use crate::domain::a003_memo::ui::details::MemoDetails;
use crate::shared::inline_create::{AlertNotifier, FetchTransport, InlineCreateSession};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // Один реестр диалогов "Add New" на всю страницу
    provide_context(InlineCreateSession::new(
        Arc::new(FetchTransport),
        Arc::new(AlertNotifier),
    ));

    view! {
        <main class="app">
            <MemoDetails />
        </main>
    }
}
