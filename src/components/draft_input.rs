//! Draft Input Component
//!
//! Text field bound to the open surface's draft. Enter saves.

use leptos::prelude::*;
use todo_core::TodoEvent;

use crate::store::{store_dispatch, use_app_store, ScreenStateStoreFields};

#[component]
pub fn DraftInput() -> impl IntoView {
    let store = use_app_store();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus when the surface opens
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let draft = move || {
        store
            .todos()
            .read()
            .draft_text()
            .unwrap_or_default()
            .to_string()
    };

    view! {
        <input
            type="text"
            class="draft-input"
            placeholder="Enter TODO item"
            node_ref=input_ref
            prop:value=draft
            on:input=move |ev| {
                store_dispatch(&store, TodoEvent::DraftChanged(event_target_value(&ev)));
            }
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    store_dispatch(&store, TodoEvent::SaveConfirmed);
                }
            }
        />
    }
}
