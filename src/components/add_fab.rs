//! Floating Add Button

use leptos::prelude::*;
use todo_core::TodoEvent;

use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn AddFab() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="fab"
            title="Add item"
            on:click=move |_| store_dispatch(&store, TodoEvent::AddPressed)
        >
            "+"
        </button>
    }
}
