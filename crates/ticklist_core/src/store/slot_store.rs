//! List store contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Mirror the in-memory list into one named slot as a JSON array.
//! - Recover silently from absent or malformed slot content on load.
//!
//! # Invariants
//! - Saves are full overwrites of the slot value.
//! - Load never fails on bad payloads; it degrades to an empty list and
//!   logs a `slot_decode_failed` event.

use crate::db::DbError;
use crate::model::item::Item;
use crate::model::list::ToDoList;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key under which the list is persisted.
///
/// Part of the stored format; changing it orphans previously saved lists.
pub const LIST_SLOT_KEY: &str = "myToDoList";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface the session persists through.
///
/// A trait seam so tests and alternative front ends can substitute their
/// own persistence.
pub trait ListStore {
    /// Loads the last-saved list, or an empty list when nothing usable is
    /// stored.
    fn load_list(&self) -> StoreResult<ToDoList>;
    /// Overwrites the slot with the full current contents of `list`.
    fn save_list(&self, list: &ToDoList) -> StoreResult<()>;
}

/// SQLite-backed list store over the `slots` table.
pub struct SqliteListStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ListStore for SqliteListStore<'_> {
    fn load_list(&self) -> StoreResult<ToDoList> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [LIST_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = stored else {
            return Ok(ToDoList::new());
        };

        match serde_json::from_str::<Vec<Item>>(&payload) {
            Ok(items) => Ok(ToDoList::from_items(items)),
            Err(err) => {
                warn!(
                    "event=slot_decode_failed module=store status=recovered key={} error={}",
                    LIST_SLOT_KEY, err
                );
                Ok(ToDoList::new())
            }
        }
    }

    fn save_list(&self, list: &ToDoList) -> StoreResult<()> {
        let payload = serde_json::to_string(list.items()).map_err(StoreError::Serialize)?;

        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![LIST_SLOT_KEY, payload],
        )?;

        Ok(())
    }
}
