//! Ordered, mutable to-do list.
//!
//! # Responsibility
//! - Own the in-memory item sequence for one session.
//! - Provide add/remove/clear/enumerate plus next-id computation.
//!
//! # Invariants
//! - Insertion order = display order = storage order.
//! - All ids in the sequence are unique at any observed point.
//! - Removal deletes the matching element without reordering the rest.

use crate::model::item::{Item, ItemId};

/// Ordered sequence of checklist items.
///
/// Instantiated once per session, repopulated from the store on load and
/// mutated only through the operations below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToDoList {
    items: Vec<Item>,
}

impl ToDoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from already-ordered items, e.g. a decoded store slot.
    ///
    /// Id uniqueness is the caller's contract, as with [`ToDoList::add_item`].
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Appends an item to the end of the sequence.
    ///
    /// No duplicate-id check is performed; callers assign ids via
    /// [`ToDoList::next_id`].
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first element whose id matches and returns it.
    ///
    /// Returns `None` and leaves the sequence unchanged when no element
    /// matches. Linear scan.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Empties the sequence unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the current ordered sequence as a read-only snapshot.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the id for the next item to append.
    ///
    /// Empty list -> 1, otherwise one past the highest id present. Since
    /// ids are assigned increasing and appended in order, this equals
    /// last-element-id-plus-one for every sequence this crate produces,
    /// and stays collision-free even if stored data was reordered by hand.
    pub fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max_id| max_id + 1)
    }
}
