//! Shopping list data model and snapshot representation.
//!
//! DESIGN
//! ======
//! The serde field names follow the snapshot layout written by the mobile
//! app (`listName`, `text` for the item array, `isExpanded`) so existing
//! on-device snapshots load without conversion. Rust-side names describe
//! what the fields are.

use serde::{Deserialize, Serialize};

/// Identifier of a [`ShoppingList`]. Timestamp-shaped, see [`crate::ids`].
pub type ListId = i64;

/// Identifier of an [`Item`], unique within its owning list.
pub type ItemId = i64;

// =============================================================================
// ITEM
// =============================================================================

/// A single entry on a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    /// Checked off. Drives strikethrough presentation, never removal.
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), completed: false }
    }
}

// =============================================================================
// SHOPPING LIST
// =============================================================================

/// A named list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    #[serde(rename = "listName")]
    pub name: String,
    /// Items in insertion order.
    #[serde(rename = "text", default)]
    pub items: Vec<Item>,
    /// Persisted for snapshot compatibility. No operation toggles it.
    #[serde(default)]
    pub completed: bool,
    /// Display toggle: expanded lists show their items.
    #[serde(rename = "isExpanded", default)]
    pub expanded: bool,
}

impl ShoppingList {
    #[must_use]
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), items: Vec::new(), completed: false, expanded: false }
    }

    #[must_use]
    pub fn find_item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Number of checked-off items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Largest identifier used by this list or any of its items.
    #[must_use]
    pub fn max_id(&self) -> i64 {
        self.items.iter().map(|item| item.id).fold(self.id, i64::max)
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
