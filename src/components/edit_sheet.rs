//! Edit Sheet Component
//!
//! Bottom-sheet modal used for adding and editing in the swipe + menu variant.
//! Tapping outside the sheet cancels.

use leptos::prelude::*;
use todo_core::TodoEvent;

use crate::components::{DraftInput, SurfaceActions};
use crate::store::{store_dispatch, use_app_store, ScreenStateStoreFields};

#[component]
pub fn EditSheet() -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.todos().read().is_surface_open();

    view! {
        <Show when=is_open>
            <div
                class="modal-backdrop"
                on:click=move |_| store_dispatch(&store, TodoEvent::EditCancelled)
            />
            <div class="bottom-sheet">
                <DraftInput />
                <SurfaceActions />
            </div>
        </Show>
    }
}
