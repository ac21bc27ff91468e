//! Edit Dialog Component
//!
//! Centered dialog used for adding and editing in the long press variant.

use leptos::prelude::*;
use todo_core::TodoEvent;

use crate::components::{DraftInput, SurfaceActions};
use crate::store::{store_dispatch, use_app_store, ScreenStateStoreFields};

#[component]
pub fn EditDialog() -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.todos().read().is_surface_open();
    let title = move || {
        if store.todos().read().editing_target().is_some() {
            "Edit item"
        } else {
            "New item"
        }
    };

    view! {
        <Show when=is_open>
            <div
                class="modal-backdrop"
                on:click=move |_| store_dispatch(&store, TodoEvent::EditCancelled)
            />
            <div class="dialog" role="dialog">
                <h2 class="dialog-title">{title}</h2>
                <DraftInput />
                <SurfaceActions />
            </div>
        </Show>
    }
}
