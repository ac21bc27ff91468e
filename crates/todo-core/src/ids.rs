//! Item id generation
//!
//! Ids come from a counter rather than the clock so that two items created
//! within the same millisecond still get distinct ids.

use crate::error::{TodoError, TodoResult};
use crate::item::ItemId;

/// Monotonic id counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<u32>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue counting after `last`
    pub fn starting_after(last: ItemId) -> Self {
        Self { next: last.0.checked_add(1) }
    }

    /// Make sure `id` is never handed out again
    pub fn observe(&mut self, id: ItemId) {
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> TodoResult<ItemId> {
        let id = self.next.ok_or(TodoError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(ItemId(id))
    }

    /// Peek at the id `next_id` would return
    pub fn peek(&self) -> Option<ItemId> {
        self.next.map(ItemId)
    }
}
