//! Item Entity
//!
//! A single todo entry. Only its text changes after creation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of an item within one screen session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display text, never blank once committed
    pub text: String,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    /// Whether the text is blank after trimming
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemId(1), "Item 1");
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.text, "Item 1");
        assert!(!item.is_blank());
    }

    #[test]
    fn test_blank_item() {
        assert!(Item::new(ItemId(2), " \t\n").is_blank());
    }

    #[test]
    fn test_item_id_serializes_as_number() {
        let json = serde_json::to_string(&Item::new(ItemId(5), "x")).unwrap();
        assert_eq!(json, r#"{"id":5,"text":"x"}"#);
    }
}
