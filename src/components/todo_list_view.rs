//! Todo List View Component
//!
//! Renders items in insertion order with the row type of the active variant.

use leptos::prelude::*;
use todo_core::Item;

use crate::components::{LongPressRow, SwipeRow};
use crate::config::ScreenVariant;
use crate::store::{use_app_store, ScreenStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();
    let variant = store.variant().get_untracked();

    let items = move || store.todos().read().items().to_vec();
    let is_empty = move || store.todos().read().is_empty();

    view! {
        <div class="todo-list">
            <For
                each=items
                // Text is part of the key so an edited row re-renders
                key=|item: &Item| (item.id, item.text.clone())
                children=move |item: Item| match variant {
                    ScreenVariant::SwipeMenu => view! { <SwipeRow item=item /> }.into_any(),
                    ScreenVariant::LongPress => view! { <LongPressRow item=item /> }.into_any(),
                }
            />
            <Show when=is_empty>
                <p class="empty-list">"Nothing to do"</p>
            </Show>
        </div>
    }
}
