//! Action Sheet Component
//!
//! Bottom action list for the long-pressed row.

use leptos::prelude::*;
use todo_core::TodoEvent;

use crate::store::{store_dispatch, use_app_store, ScreenStateStoreFields};

#[component]
pub fn ActionSheet() -> impl IntoView {
    let store = use_app_store();

    let target = move || {
        let todos = store.todos().read();
        let target = todos
            .actions_target()
            .and_then(|id| todos.get(id))
            .map(|item| (item.id, item.text.clone()));
        target
    };

    view! {
        {move || target().map(|(id, text)| view! {
            <div
                class="modal-backdrop"
                on:click=move |_| store_dispatch(&store, TodoEvent::ItemActionsDismissed)
            />
            <div class="action-sheet">
                <div class="action-sheet-title">{text}</div>
                <button
                    class="action-sheet-btn"
                    on:click=move |_| store_dispatch(&store, TodoEvent::EditChosen(id))
                >
                    "Edit"
                </button>
                <button
                    class="action-sheet-btn destructive"
                    on:click=move |_| store_dispatch(&store, TodoEvent::DeleteChosen(id))
                >
                    "Delete"
                </button>
                <button
                    class="action-sheet-btn cancel"
                    on:click=move |_| store_dispatch(&store, TodoEvent::ItemActionsDismissed)
                >
                    "Cancel"
                </button>
            </div>
        })}
    }
}
