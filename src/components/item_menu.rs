//! Item Menu Component
//!
//! Overflow menu anchored to a row, offering edit and delete.

use leptos::prelude::*;
use todo_core::{ItemId, TodoEvent};

use crate::store::{store_dispatch, use_app_store, ScreenStateStoreFields};

#[component]
pub fn ItemMenu(id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.todos().read().actions_target() == Some(id);

    view! {
        <div class="item-menu">
            <button
                class="item-menu-anchor"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_dispatch(&store, TodoEvent::ItemActionsRequested(id));
                }
            >
                "⋮"
            </button>
            <Show when=is_open>
                <div
                    class="menu-backdrop"
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:click=move |_| store_dispatch(&store, TodoEvent::ItemActionsDismissed)
                />
                <div class="menu-popup">
                    <button
                        class="menu-item"
                        on:click=move |_| store_dispatch(&store, TodoEvent::EditChosen(id))
                    >
                        "Editar"
                    </button>
                    <button
                        class="menu-item"
                        on:click=move |_| store_dispatch(&store, TodoEvent::DeleteChosen(id))
                    >
                        "Eliminar"
                    </button>
                </div>
            </Show>
        </div>
    }
}
