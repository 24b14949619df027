//! Core domain logic for ticklist.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId};
pub use model::list::ToDoList;
pub use service::session::{Announcement, ListSession};
pub use store::slot_store::{
    ListStore, SqliteListStore, StoreError, StoreResult, LIST_SLOT_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
