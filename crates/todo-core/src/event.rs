//! Screen Events
//!
//! The callbacks a rendering layer fires, one per user interaction.

use crate::error::TodoResult;
use crate::item::ItemId;
use crate::state::TodoListState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    /// Add button pressed
    AddPressed,
    /// Row long-pressed or its menu anchor tapped
    ItemActionsRequested(ItemId),
    /// Menu or action sheet dismissed without a choice
    ItemActionsDismissed,
    /// Delete picked from the menu, or row swiped away
    DeleteChosen(ItemId),
    /// Edit picked from the menu
    EditChosen(ItemId),
    /// Text typed into the surface
    DraftChanged(String),
    /// Save button or submit key
    SaveConfirmed,
    /// Cancel button or backdrop tap
    EditCancelled,
}

impl TodoListState {
    /// Apply one event
    pub fn dispatch(&mut self, event: TodoEvent) -> TodoResult<()> {
        match event {
            TodoEvent::AddPressed => self.request_add(),
            TodoEvent::ItemActionsRequested(id) => self.open_actions(id)?,
            TodoEvent::ItemActionsDismissed => self.dismiss_actions(),
            TodoEvent::DeleteChosen(id) => {
                self.dismiss_actions();
                self.delete_item(id)?;
            }
            TodoEvent::EditChosen(id) => {
                self.dismiss_actions();
                self.request_edit(id)?;
            }
            TodoEvent::DraftChanged(text) => self.update_draft(text)?,
            TodoEvent::SaveConfirmed => {
                self.save()?;
            }
            TodoEvent::EditCancelled => self.cancel()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::item::Item;

    fn seeded() -> TodoListState {
        TodoListState::with_items(vec![Item::new(ItemId(1), "Item 1")]).unwrap()
    }

    #[test]
    fn test_menu_edit_flow() {
        let mut state = seeded();
        state.dispatch(TodoEvent::ItemActionsRequested(ItemId(1))).unwrap();
        state.dispatch(TodoEvent::EditChosen(ItemId(1))).unwrap();
        assert_eq!(state.actions_target(), None);
        assert_eq!(state.draft_text(), Some("Item 1"));

        state.dispatch(TodoEvent::DraftChanged("Renamed".into())).unwrap();
        state.dispatch(TodoEvent::SaveConfirmed).unwrap();
        assert_eq!(state.get(ItemId(1)).unwrap().text, "Renamed");
    }

    #[test]
    fn test_menu_delete_flow() {
        let mut state = seeded();
        state.dispatch(TodoEvent::ItemActionsRequested(ItemId(1))).unwrap();
        state.dispatch(TodoEvent::DeleteChosen(ItemId(1))).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.actions_target(), None);
    }

    #[test]
    fn test_add_flow() {
        let mut state = seeded();
        state.dispatch(TodoEvent::AddPressed).unwrap();
        state.dispatch(TodoEvent::DraftChanged("Item 2".into())).unwrap();
        state.dispatch(TodoEvent::SaveConfirmed).unwrap();
        assert_eq!(state.list(), vec![(ItemId(1), "Item 1"), (ItemId(2), "Item 2")]);
    }

    #[test]
    fn test_dismiss_keeps_items() {
        let mut state = seeded();
        state.dispatch(TodoEvent::ItemActionsRequested(ItemId(1))).unwrap();
        state.dispatch(TodoEvent::ItemActionsDismissed).unwrap();
        assert_eq!(state.actions_target(), None);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_stale_choice_dismisses_menu() {
        let mut state = seeded();
        state.dispatch(TodoEvent::ItemActionsRequested(ItemId(1))).unwrap();
        assert_eq!(
            state.dispatch(TodoEvent::EditChosen(ItemId(4))),
            Err(TodoError::InvalidReference { id: ItemId(4) })
        );
        assert_eq!(state.actions_target(), None);
        assert!(!state.is_surface_open());
    }

    #[test]
    fn test_cancel_event() {
        let mut state = seeded();
        state.dispatch(TodoEvent::AddPressed).unwrap();
        state.dispatch(TodoEvent::DraftChanged("X".into())).unwrap();
        state.dispatch(TodoEvent::EditCancelled).unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state.dispatch(TodoEvent::EditCancelled), Err(TodoError::SurfaceClosed));
    }
}
