//! To-do item domain model.
//!
//! # Responsibility
//! - Define the value entity rendered as one checklist row.
//!
//! # Invariants
//! - `id` never changes after creation.
//! - `text` is trimmed, non-empty input; callers enforce this before
//!   construction.

use serde::{Deserialize, Serialize};

/// Stable identifier for a to-do item within one list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// One entry of the checklist.
///
/// Serialized field names (`_id`, `_item`) are the persisted wire format
/// and must stay stable so previously saved lists keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// List-unique identifier, monotonically assigned by the session.
    #[serde(rename = "_id")]
    pub id: ItemId,
    /// User-entered text, trimmed before construction.
    #[serde(rename = "_item")]
    pub text: String,
}

impl Item {
    /// Creates an item with a caller-assigned id.
    ///
    /// The model performs no validation; the session trims input and
    /// guarantees id uniqueness.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
