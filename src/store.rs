//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every mutation goes through `store_dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{TodoEvent, TodoListState};

use crate::config::{ScreenConfig, ScreenVariant};

/// State owned by the todo screen for its lifetime
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Items and editing state machine
    pub todos: TodoListState,
    /// Interaction front-end in use
    pub variant: ScreenVariant,
    /// App bar title
    pub title: String,
}

impl ScreenState {
    pub fn from_config(config: &ScreenConfig) -> Self {
        let todos = TodoListState::with_texts(config.seed_texts()).unwrap_or_else(|e| {
            log::warn!("[STORE] Bad seed items, starting empty: {}", e);
            TodoListState::new()
        });
        Self {
            todos,
            variant: config.variant,
            title: config.title.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<ScreenState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a screen event. Rejections are logged, never shown.
pub fn store_dispatch(store: &AppStore, event: TodoEvent) {
    log::trace!("[STORE] {:?}", event);
    if let Err(err) = store.todos().write().dispatch(event) {
        if err.is_silent() {
            log::debug!("[STORE] Ignored: {}", err);
        } else {
            log::warn!("[STORE] Rejected: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::ItemId;

    #[test]
    fn test_from_default_config() {
        let state = ScreenState::from_config(&ScreenConfig::default());
        assert_eq!(state.title, "Todo List");
        assert_eq!(state.variant, ScreenVariant::SwipeMenu);
        assert_eq!(state.todos.list(), vec![(ItemId(1), "Item 1")]);
        assert!(!state.todos.is_surface_open());
    }

    #[test]
    fn test_from_config_drops_blank_seed() {
        let config = ScreenConfig {
            seed: vec!["  ".into(), "Milk".into(), "Eggs ".into()],
            variant: ScreenVariant::LongPress,
            ..Default::default()
        };
        let state = ScreenState::from_config(&config);
        assert_eq!(state.todos.list(), vec![(ItemId(1), "Milk"), (ItemId(2), "Eggs")]);
        assert_eq!(state.variant, ScreenVariant::LongPress);
    }
}
