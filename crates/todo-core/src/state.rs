//! Todo List State
//!
//! Ordered items plus the transient interaction state of the screen:
//! the add/edit surface and the row whose action menu is open.

use std::collections::HashSet;

use crate::error::{TodoError, TodoResult};
use crate::ids::IdGenerator;
use crate::item::{Item, ItemId};
use crate::surface::Surface;

/// Screen-local todo list with its editing state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    items: Vec<Item>,
    surface: Surface,
    actions_target: Option<ItemId>,
    ids: IdGenerator,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing items; ids handed out later continue past the
    /// highest seeded id
    pub fn with_items(items: Vec<Item>) -> TodoResult<Self> {
        let mut ids = IdGenerator::new();
        for item in &items {
            ids.observe(item.id);
        }
        let state = Self {
            items,
            surface: Surface::Closed,
            actions_target: None,
            ids,
        };
        state.validate()?;
        Ok(state)
    }

    /// Start from plain texts, assigning ids in order. Blank texts are skipped.
    pub fn with_texts<I, S>(texts: I) -> TodoResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::new();
        for text in texts {
            let text = text.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            let id = state.ids.next_id()?;
            state.items.push(Item::new(id, text));
        }
        Ok(state)
    }

    /// Check the list invariants, returning the first violation found
    pub fn validate(&self) -> TodoResult<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(TodoError::DuplicateId { id: item.id });
            }
            if item.is_blank() {
                return Err(TodoError::EmptyText { id: item.id });
            }
        }
        for id in self.surface.target().into_iter().chain(self.actions_target) {
            if !seen.contains(&id) {
                return Err(TodoError::InvalidReference { id });
            }
        }
        Ok(())
    }

    // ========================
    // Queries
    // ========================

    /// Ordered `(id, text)` pairs for display
    pub fn list(&self) -> Vec<(ItemId, &str)> {
        self.items.iter().map(|item| (item.id, item.text.as_str())).collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn is_surface_open(&self) -> bool {
        self.surface.is_open()
    }

    pub fn draft_text(&self) -> Option<&str> {
        self.surface.draft()
    }

    pub fn editing_target(&self) -> Option<ItemId> {
        self.surface.target()
    }

    /// Row whose action menu (or action sheet) is open
    pub fn actions_target(&self) -> Option<ItemId> {
        self.actions_target
    }

    fn position(&self, id: ItemId) -> TodoResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::InvalidReference { id })
    }

    // ========================
    // Transitions
    // ========================

    /// Open the surface for a new item with an empty draft
    pub fn request_add(&mut self) {
        log::debug!("[TODO] open surface for new item");
        self.actions_target = None;
        self.surface = Surface::Adding { draft: String::new() };
    }

    /// Open the surface for `id`, pre-filled with its text.
    /// A missing id leaves everything untouched.
    pub fn request_edit(&mut self, id: ItemId) -> TodoResult<()> {
        let index = self.position(id)?;
        log::debug!("[TODO] open surface for item {}", id);
        self.actions_target = None;
        self.surface = Surface::Editing {
            target: id,
            draft: self.items[index].text.clone(),
        };
        Ok(())
    }

    /// Replace the draft verbatim; trimming waits until save
    pub fn update_draft(&mut self, text: impl Into<String>) -> TodoResult<()> {
        let draft = self.surface.draft_mut().ok_or(TodoError::SurfaceClosed)?;
        *draft = text.into();
        Ok(())
    }

    /// Commit the trimmed draft and close the surface.
    ///
    /// A blank draft is rejected and the surface stays open with the draft
    /// as typed. Returns the id of the created or edited item.
    pub fn save(&mut self) -> TodoResult<ItemId> {
        let trimmed = match &self.surface {
            Surface::Closed => return Err(TodoError::SurfaceClosed),
            Surface::Adding { draft } | Surface::Editing { draft, .. } => draft.trim().to_string(),
        };
        if trimmed.is_empty() {
            log::debug!("[TODO] ignoring blank submission");
            return Err(TodoError::EmptySubmission);
        }

        let id = match self.surface {
            Surface::Closed => return Err(TodoError::SurfaceClosed),
            Surface::Adding { .. } => {
                let id = self.ids.next_id()?;
                self.items.push(Item::new(id, trimmed));
                log::debug!("[TODO] added item {}", id);
                id
            }
            Surface::Editing { target, .. } => match self.position(target) {
                Ok(index) => {
                    self.items[index].text = trimmed;
                    log::debug!("[TODO] updated item {}", target);
                    target
                }
                Err(err) => {
                    // Target vanished underneath the surface: drop the edit.
                    self.surface = Surface::Closed;
                    return Err(err);
                }
            },
        };
        self.surface = Surface::Closed;
        Ok(id)
    }

    /// Close the surface, discarding the draft
    pub fn cancel(&mut self) -> TodoResult<()> {
        if !self.surface.is_open() {
            return Err(TodoError::SurfaceClosed);
        }
        log::debug!("[TODO] surface cancelled");
        self.surface = Surface::Closed;
        Ok(())
    }

    /// Remove `id`, keeping the order of the rest. Closes the surface or the
    /// action menu if either pointed at it.
    pub fn delete_item(&mut self, id: ItemId) -> TodoResult<Item> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        if self.surface.target() == Some(id) {
            self.surface = Surface::Closed;
        }
        if self.actions_target == Some(id) {
            self.actions_target = None;
        }
        log::debug!("[TODO] deleted item {}", id);
        Ok(removed)
    }

    /// Show the action menu for `id`
    pub fn open_actions(&mut self, id: ItemId) -> TodoResult<()> {
        self.position(id)?;
        self.actions_target = Some(id);
        Ok(())
    }

    pub fn dismiss_actions(&mut self) {
        self.actions_target = None;
    }
}
