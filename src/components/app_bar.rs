//! App Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, ScreenStateStoreFields};

/// Top bar with the screen title and item count
#[component]
pub fn AppBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="app-bar">
            <h1 class="app-bar-title">{move || store.title().get()}</h1>
            <span class="app-bar-count">{move || format!("{} items", store.todos().read().len())}</span>
        </header>
    }
}
