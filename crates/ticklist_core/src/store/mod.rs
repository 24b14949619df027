//! Persistence layer for the checklist.
//!
//! # Responsibility
//! - Define the store contract the session persists through.
//! - Isolate SQLite and JSON encoding details from the session logic.
//!
//! # Invariants
//! - The store always holds the full serialization of the last-saved list,
//!   never an incremental delta.

pub mod slot_store;
