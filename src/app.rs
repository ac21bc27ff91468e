//! Todo List Frontend App
//!
//! Single screen: app bar, item list, add button and the variant's
//! add/edit surface.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionSheet, AddFab, AppBar, EditDialog, EditSheet, TodoListView};
use crate::config::{ScreenConfig, ScreenVariant};
use crate::store::ScreenState;

#[component]
pub fn App() -> impl IntoView {
    let (config, errors) = ScreenConfig::load();
    crate::init_logging(config.max_log_level());
    for err in errors {
        log::warn!("[APP] Config ignored: {}", err);
    }
    log::info!("[APP] Mounting {:?} screen with {} seed items", config.variant, config.seed_texts().count());

    // State lives exactly as long as the screen
    let store = Store::new(ScreenState::from_config(&config));
    provide_context(store);

    let variant = config.variant;

    view! {
        <div class="screen">
            <AppBar />

            <TodoListView />

            <AddFab />

            {match variant {
                ScreenVariant::SwipeMenu => view! { <EditSheet /> }.into_any(),
                ScreenVariant::LongPress => view! {
                    <ActionSheet />
                    <EditDialog />
                }.into_any(),
            }}
        </div>
    }
}
