//! Swipe Row Component
//!
//! Row that deletes itself when swiped left far enough to reveal the
//! "Eliminar" panel. The overflow menu sits at its right edge.

use leptos::prelude::*;
use leptos_gestures::*;
use todo_core::{Item, TodoEvent};

use crate::components::ItemMenu;
use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn SwipeRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let sw = create_swipe_signals(SwipeConfig::default());
    let on_open = Callback::new(move |_| {
        log::debug!("[SWIPE] Row {} swiped away", id);
        store_dispatch(&store, TodoEvent::DeleteChosen(id));
    });

    // No transform at rest: a transformed row would trap the menu's fixed backdrop
    let row_style = move || {
        let offset = sw.offset();
        if sw.is_swiping() {
            format!("transform: translateX({}px); transition: none;", offset)
        } else if offset != 0.0 {
            format!("transform: translateX({}px);", offset)
        } else {
            String::new()
        }
    };

    view! {
        <div class="swipe-row">
            <div class="swipe-row-action">
                <span class="swipe-row-action-text">"Eliminar"</span>
            </div>
            <div
                class="item-row"
                style=row_style
                on:pointerdown=make_on_swipe_start(sw)
                on:pointermove=make_on_swipe_move(sw)
                on:pointerup=make_on_swipe_end(sw, on_open)
                on:pointercancel=make_on_swipe_cancel(sw)
            >
                <span class="item-text">{item.text.clone()}</span>
                <ItemMenu id=id />
            </div>
        </div>
    }
}
