//! Checklist session: the application controller minus the screen.
//!
//! # Responsibility
//! - Own the long-lived list and its backing store for one process.
//! - Implement the startup/add/remove/clear sequences, mirroring the full
//!   list into the store after every mutation.
//!
//! # Invariants
//! - Every successful mutation is followed by a store save before the
//!   operation returns.
//! - Empty input, absent ids and empty-list clears are silent no-ops that
//!   touch neither the list nor the store.
//! - The in-memory list stays authoritative for the session even when a
//!   save fails; the error is propagated for the front end to surface.

use crate::model::item::{Item, ItemId};
use crate::model::list::ToDoList;
use crate::store::slot_store::{ListStore, StoreResult};
use log::info;
use std::fmt::{Display, Formatter};

/// Live-region message describing a completed add or remove.
///
/// Displays as `<text> <action>.`, the exact string announced to assistive
/// front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// The affected item's text.
    pub text: String,
    /// Action verb phrase, e.g. `added`.
    pub action: &'static str,
}

impl Announcement {
    fn added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: "added",
        }
    }

    fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: "removed from list",
        }
    }
}

impl Display for Announcement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}.", self.text, self.action)
    }
}

/// Long-lived checklist session over a store implementation.
pub struct ListSession<S: ListStore> {
    store: S,
    list: ToDoList,
}

impl<S: ListStore> ListSession<S> {
    /// Startup sequence: repopulate the list from the store.
    ///
    /// Absent or malformed stored content yields an empty list (handled by
    /// the store, never surfaced).
    pub fn load(store: S) -> StoreResult<Self> {
        let list = store.load_list()?;
        info!(
            "event=list_loaded module=session status=ok count={}",
            list.len()
        );
        Ok(Self { store, list })
    }

    /// Returns the current ordered items for rendering.
    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Add sequence: trim, append with the next id, persist, announce.
    ///
    /// Returns `Ok(None)` without mutating anything when `raw_text` is
    /// empty after trimming.
    pub fn add_item(&mut self, raw_text: &str) -> StoreResult<Option<Announcement>> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let id = self.list.next_id();
        self.list.add_item(Item::new(id, text));
        self.store.save_list(&self.list)?;
        info!(
            "event=item_added module=session status=ok id={} count={}",
            id,
            self.list.len()
        );

        Ok(Some(Announcement::added(text)))
    }

    /// Remove sequence: drop the matching item, persist, announce.
    ///
    /// Returns `Ok(None)` when `id` is not present; the list and store are
    /// left untouched.
    pub fn remove_item(&mut self, id: ItemId) -> StoreResult<Option<Announcement>> {
        let Some(removed) = self.list.remove_item(id) else {
            return Ok(None);
        };

        self.store.save_list(&self.list)?;
        info!(
            "event=item_removed module=session status=ok id={} count={}",
            id,
            self.list.len()
        );

        Ok(Some(Announcement::removed(removed.text)))
    }

    /// Clear sequence, gated by an injected confirmation capability.
    ///
    /// An empty list returns `Ok(false)` without invoking `confirm`. A
    /// declined confirmation returns `Ok(false)` with nothing touched.
    /// Returns `Ok(true)` only when the list was cleared and persisted.
    pub fn clear_list(&mut self, confirm: impl FnOnce() -> bool) -> StoreResult<bool> {
        if self.list.is_empty() {
            return Ok(false);
        }
        if !confirm() {
            return Ok(false);
        }

        self.list.clear();
        self.store.save_list(&self.list)?;
        info!("event=list_cleared module=session status=ok");

        Ok(true)
    }
}
