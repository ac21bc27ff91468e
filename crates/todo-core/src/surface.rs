//! Add/Edit Surface State
//!
//! The input surface (modal, sheet or dialog) is either closed or open for
//! adding or editing. The draft lives inside the open variants, so there is
//! no draft to read while the surface is closed.

use crate::item::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Surface {
    #[default]
    Closed,
    /// Creating a new item
    Adding { draft: String },
    /// Replacing the text of `target`
    Editing { target: ItemId, draft: String },
}

impl Surface {
    pub fn is_open(&self) -> bool {
        !matches!(self, Surface::Closed)
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Surface::Closed => None,
            Surface::Adding { draft } | Surface::Editing { draft, .. } => Some(draft),
        }
    }

    /// Item being edited; `None` while closed or adding
    pub fn target(&self) -> Option<ItemId> {
        match self {
            Surface::Editing { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub(crate) fn draft_mut(&mut self) -> Option<&mut String> {
        match self {
            Surface::Closed => None,
            Surface::Adding { draft } | Surface::Editing { draft, .. } => Some(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_has_no_draft() {
        let surface = Surface::default();
        assert!(!surface.is_open());
        assert_eq!(surface.draft(), None);
        assert_eq!(surface.target(), None);
    }

    #[test]
    fn test_editing_exposes_target() {
        let surface = Surface::Editing { target: ItemId(2), draft: "B".into() };
        assert!(surface.is_open());
        assert_eq!(surface.draft(), Some("B"));
        assert_eq!(surface.target(), Some(ItemId(2)));
    }
}
