//! List Store holds the authoritative in-memory collection of shopping lists.
//!
//! DESIGN
//! ======
//! Every operation is a pure function from the old collection plus its
//! arguments to a new collection. Unknown list or item ids are silent no-ops,
//! so repeating a delete or toggle against a missing id is idempotent.
//! [`ListStore`] owns the current collection and an [`IdGenerator`], applies
//! the pure operations and replaces its collection wholesale.
//!
//! Validation is limited to rejecting names and item text that are empty once
//! trimmed. Accepted input is stored as given.

use crate::ids::IdGenerator;
use crate::model::{Item, ItemId, ListId, ShoppingList};

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Apply `f` to the list with `list_id`, cloning every other list unchanged.
fn map_list<F>(lists: &[ShoppingList], list_id: ListId, f: F) -> Vec<ShoppingList>
where
    F: Fn(&ShoppingList) -> ShoppingList,
{
    lists
        .iter()
        .map(|list| if list.id == list_id { f(list) } else { list.clone() })
        .collect()
}

// =============================================================================
// PURE OPERATIONS
// =============================================================================

/// Append a new empty, collapsed list. Blank names leave the collection unchanged.
#[must_use]
pub fn create_list(lists: &[ShoppingList], id: ListId, name: &str) -> Vec<ShoppingList> {
    let mut next = lists.to_vec();
    if !is_blank(name) {
        next.push(ShoppingList::new(id, name));
    }
    next
}

/// Append an unchecked item to the matching list. Blank text, or a list id
/// with no match, leaves the collection unchanged.
#[must_use]
pub fn create_item(lists: &[ShoppingList], list_id: ListId, id: ItemId, text: &str) -> Vec<ShoppingList> {
    if is_blank(text) {
        return lists.to_vec();
    }
    map_list(lists, list_id, |list| {
        let mut list = list.clone();
        list.items.push(Item::new(id, text));
        list
    })
}

#[must_use]
pub fn delete_list(lists: &[ShoppingList], list_id: ListId) -> Vec<ShoppingList> {
    lists.iter().filter(|list| list.id != list_id).cloned().collect()
}

#[must_use]
pub fn delete_item(lists: &[ShoppingList], list_id: ListId, item_id: ItemId) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| ShoppingList {
        items: list.items.iter().filter(|item| item.id != item_id).cloned().collect(),
        ..list.clone()
    })
}

#[must_use]
pub fn toggle_item_completed(lists: &[ShoppingList], list_id: ListId, item_id: ItemId) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| ShoppingList {
        items: list
            .items
            .iter()
            .map(|item| {
                if item.id == item_id {
                    Item { completed: !item.completed, ..item.clone() }
                } else {
                    item.clone()
                }
            })
            .collect(),
        ..list.clone()
    })
}

#[must_use]
pub fn toggle_list_expanded(lists: &[ShoppingList], list_id: ListId) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| ShoppingList { expanded: !list.expanded, ..list.clone() })
}

/// Remove every item from the matching list, keeping the list itself.
#[must_use]
pub fn clear_items(lists: &[ShoppingList], list_id: ListId) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| ShoppingList { items: Vec::new(), ..list.clone() })
}

/// Remove checked-off items from the matching list.
#[must_use]
pub fn remove_completed_items(lists: &[ShoppingList], list_id: ListId) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| ShoppingList {
        items: list.items.iter().filter(|item| !item.completed).cloned().collect(),
        ..list.clone()
    })
}

// =============================================================================
// STORE
// =============================================================================

/// Owner of the current collection. Mutation happens only through the
/// operations above.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    lists: Vec<ShoppingList>,
    ids: IdGenerator,
}

impl ListStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store initialised from a loaded snapshot. New ids are drawn above every
    /// id already present.
    #[must_use]
    pub fn from_lists(lists: Vec<ShoppingList>) -> Self {
        let floor = lists.iter().map(ShoppingList::max_id).max().unwrap_or(0);
        Self { lists, ids: IdGenerator::seeded(floor) }
    }

    #[must_use]
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    #[must_use]
    pub fn find(&self, list_id: ListId) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the new list's id, or `None` if the name was rejected.
    pub fn create_list(&mut self, name: &str) -> Option<ListId> {
        if is_blank(name) {
            return None;
        }
        let id = self.ids.next_id();
        self.lists = create_list(&self.lists, id, name);
        Some(id)
    }

    /// Returns the new item's id, or `None` if the text was rejected or the
    /// list does not exist.
    pub fn create_item(&mut self, list_id: ListId, text: &str) -> Option<ItemId> {
        if is_blank(text) || self.find(list_id).is_none() {
            return None;
        }
        let id = self.ids.next_id();
        self.lists = create_item(&self.lists, list_id, id, text);
        Some(id)
    }

    pub fn delete_list(&mut self, list_id: ListId) {
        self.lists = delete_list(&self.lists, list_id);
    }

    pub fn delete_item(&mut self, list_id: ListId, item_id: ItemId) {
        self.lists = delete_item(&self.lists, list_id, item_id);
    }

    pub fn toggle_item_completed(&mut self, list_id: ListId, item_id: ItemId) {
        self.lists = toggle_item_completed(&self.lists, list_id, item_id);
    }

    pub fn toggle_list_expanded(&mut self, list_id: ListId) {
        self.lists = toggle_list_expanded(&self.lists, list_id);
    }

    pub fn clear_items(&mut self, list_id: ListId) {
        self.lists = clear_items(&self.lists, list_id);
    }

    pub fn remove_completed_items(&mut self, list_id: ListId) {
        self.lists = remove_completed_items(&self.lists, list_id);
    }
}

#[cfg(test)]
#[path = "lists_test.rs"]
mod tests;
