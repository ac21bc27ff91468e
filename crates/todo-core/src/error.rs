//! Error types for todo list operations

use thiserror::Error;

use crate::item::ItemId;

/// Result type for todo list operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Reasons an operation was rejected.
///
/// A rejected operation leaves the state as it was, so callers may
/// ignore these once logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Edit, delete or menu request against an id that is not in the list
    #[error("item not found: {id}")]
    InvalidReference { id: ItemId },

    /// Save attempted with blank (post-trim) text
    #[error("cannot save an empty item")]
    EmptySubmission,

    /// Draft, save or cancel while no add/edit surface is open
    #[error("no add/edit surface is open")]
    SurfaceClosed,

    /// Seed data contains the same id twice
    #[error("duplicate item id: {id}")]
    DuplicateId { id: ItemId },

    /// Seed data contains an item with blank text
    #[error("item {id} has empty text")]
    EmptyText { id: ItemId },

    /// The id counter has no values left
    #[error("item ids exhausted")]
    IdsExhausted,
}

impl TodoError {
    /// Rejections the screen swallows without telling the user
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            TodoError::InvalidReference { .. } | TodoError::EmptySubmission | TodoError::SurfaceClosed
        )
    }
}
