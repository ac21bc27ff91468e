//! Save / Cancel buttons shared by the sheet and the dialog

use leptos::prelude::*;
use todo_core::TodoEvent;

use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn SurfaceActions() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="surface-actions">
            <button
                class="outlined-btn"
                on:click=move |_| store_dispatch(&store, TodoEvent::SaveConfirmed)
            >
                "Save"
            </button>
            <button
                class="outlined-btn"
                on:click=move |_| store_dispatch(&store, TodoEvent::EditCancelled)
            >
                "Cancel"
            </button>
        </div>
    }
}
