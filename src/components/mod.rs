//! UI Components
//!
//! Leptos components for the todo screen. Both interaction variants share
//! the store and `DraftInput`; they differ only in rows and surfaces.

mod app_bar;
mod add_fab;
mod todo_list_view;
mod draft_input;
mod surface_actions;
// Swipe + menu variant
mod swipe_row;
mod item_menu;
mod edit_sheet;
// Long press + dialog variant
mod long_press_row;
mod action_sheet;
mod edit_dialog;

pub use app_bar::AppBar;
pub use add_fab::AddFab;
pub use todo_list_view::TodoListView;
pub use draft_input::DraftInput;
pub use surface_actions::SurfaceActions;
pub use swipe_row::SwipeRow;
pub use item_menu::ItemMenu;
pub use edit_sheet::EditSheet;
pub use long_press_row::LongPressRow;
pub use action_sheet::ActionSheet;
pub use edit_dialog::EditDialog;
