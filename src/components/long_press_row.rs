//! Long Press Row Component
//!
//! Row that opens the action sheet when held. The context menu event
//! (right click, or the browser's own long press) does the same.

use leptos::prelude::*;
use leptos_gestures::*;
use todo_core::{Item, TodoEvent};

use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn LongPressRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let lp = create_long_press_signals();
    let on_long_press = Callback::new(move |_| {
        log::debug!("[PRESS] Long press on row {}", id);
        store_dispatch(&store, TodoEvent::ItemActionsRequested(id));
    });

    let row_class = move || if lp.is_pressed() { "item-row pressed" } else { "item-row" };

    view! {
        <div
            class=row_class
            on:pointerdown=make_on_press_start(lp, on_long_press)
            on:pointermove=make_on_press_move(lp)
            on:pointerup=make_on_press_end(lp)
            on:pointercancel=make_on_press_cancel(lp)
            on:pointerleave=make_on_press_cancel(lp)
            on:click=make_on_press_click(lp)
            on:contextmenu=move |ev| {
                ev.prevent_default();
                lp.tracker.update(|t| t.end());
                store_dispatch(&store, TodoEvent::ItemActionsRequested(id));
            }
        >
            <span class="item-text">{item.text.clone()}</span>
        </div>
    }
}
