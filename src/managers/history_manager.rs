//! History Manager for QR Baghdad.
//!
//! Implements `HistoryManagerTrait` — recording generated texts, recalling,
//! deleting, and clearing — backed by the `qr-history` blob in the durable
//! key-value store.
//!
//! List mutations are pure functions (`record_entry`, `remove_entry`,
//! `clear_entries`) over the current list; the manager owns the in-memory
//! list, applies the pure core, and persists afterwards. A failed durable
//! write is recoverable: the in-memory list keeps the new state and the
//! session continues, reverting to the last persisted snapshot on reload.

use std::sync::Arc;

use chrono::{Local, Utc};
use log::debug;

use crate::database::Database;
use crate::types::errors::HistoryError;
use crate::types::history::HistoryItem;

/// Storage key for the serialized history list.
pub const HISTORY_KEY: &str = "qr-history";

/// Maximum number of retained items; oldest beyond the cap are dropped
/// silently on insert.
pub const HISTORY_LIMIT: usize = 50;

/// Outcome of a `record` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new item was prepended.
    Added,
    /// An item with equal text already exists; the list is unchanged and
    /// the existing item keeps its position.
    Duplicate,
}

/// Outcome of a `remove` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// No item with that id; the call is a no-op, not an error.
    NotFound,
}

/// Outcome of a `clear` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    /// The list was already empty; storage is left untouched.
    AlreadyEmpty,
    /// The user declined the confirmation step; nothing changed.
    NotConfirmed,
}

/// Prepends `item` unless an item with equal text already exists, then
/// truncates to [`HISTORY_LIMIT`]. Re-recording an existing text does not
/// refresh its position.
pub fn record_entry(items: &[HistoryItem], item: HistoryItem) -> (Vec<HistoryItem>, RecordOutcome) {
    if items.iter().any(|i| i.text == item.text) {
        return (items.to_vec(), RecordOutcome::Duplicate);
    }
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next.truncate(HISTORY_LIMIT);
    (next, RecordOutcome::Added)
}

/// Removes the item with `id` if present.
pub fn remove_entry(items: &[HistoryItem], id: i64) -> (Vec<HistoryItem>, RemoveOutcome) {
    if !items.iter().any(|i| i.id == id) {
        return (items.to_vec(), RemoveOutcome::NotFound);
    }
    let next = items.iter().filter(|i| i.id != id).cloned().collect();
    (next, RemoveOutcome::Removed)
}

/// Empties the list. An already empty list short-circuits before the
/// confirmation check; a non-empty list requires `confirmed`.
pub fn clear_entries(items: &[HistoryItem], confirmed: bool) -> (Vec<HistoryItem>, ClearOutcome) {
    if items.is_empty() {
        return (Vec::new(), ClearOutcome::AlreadyEmpty);
    }
    if !confirmed {
        return (items.to_vec(), ClearOutcome::NotConfirmed);
    }
    (Vec::new(), ClearOutcome::Cleared)
}

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record(&mut self, text: &str) -> Result<RecordOutcome, HistoryError>;
    fn recall(&self, id: i64) -> Option<&HistoryItem>;
    fn remove(&mut self, id: i64) -> Result<RemoveOutcome, HistoryError>;
    fn clear(&mut self, confirmed: bool) -> Result<ClearOutcome, HistoryError>;
    fn items(&self) -> &[HistoryItem];
}

/// History manager backed by the durable key-value store.
pub struct HistoryManager {
    db: Arc<Database>,
    items: Vec<HistoryItem>,
    last_id: i64,
}

impl HistoryManager {
    /// Loads the persisted history list.
    ///
    /// A missing `qr-history` key yields an empty list; a malformed blob is
    /// a serialization error.
    pub fn load(db: Arc<Database>) -> Result<Self, HistoryError> {
        let items: Vec<HistoryItem> = match db
            .get_value(HISTORY_KEY)
            .map_err(|e| HistoryError::StorageError(e.to_string()))?
        {
            Some(blob) => serde_json::from_str(&blob)
                .map_err(|e| HistoryError::SerializationError(e.to_string()))?,
            None => Vec::new(),
        };
        let last_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        Ok(Self { db, items, last_id })
    }

    /// Issues a fresh id: millisecond clock, bumped past the last issued
    /// value so ids stay strictly increasing even within one millisecond.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = if now > self.last_id {
            now
        } else {
            self.last_id + 1
        };
        self.last_id
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let blob = serde_json::to_string(&self.items)
            .map_err(|e| HistoryError::SerializationError(e.to_string()))?;
        self.db
            .set_value(HISTORY_KEY, &blob)
            .map_err(|e| HistoryError::StorageError(e.to_string()))
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Records a generated text. Duplicate texts are a no-op that preserves
    /// the existing item's position; otherwise a fresh item is prepended and
    /// the full list persisted.
    fn record(&mut self, text: &str) -> Result<RecordOutcome, HistoryError> {
        let text = text.trim();
        let item = HistoryItem {
            id: self.next_id(),
            text: text.to_string(),
            timestamp: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
        };
        let (next, outcome) = record_entry(&self.items, item);
        if outcome == RecordOutcome::Added {
            self.items = next;
            debug!("history: recorded item, {} total", self.items.len());
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Pure read: returns the item with `id` without touching the list.
    fn recall(&self, id: i64) -> Option<&HistoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn remove(&mut self, id: i64) -> Result<RemoveOutcome, HistoryError> {
        let (next, outcome) = remove_entry(&self.items, id);
        if outcome == RemoveOutcome::Removed {
            self.items = next;
            self.persist()?;
        }
        Ok(outcome)
    }

    fn clear(&mut self, confirmed: bool) -> Result<ClearOutcome, HistoryError> {
        let (next, outcome) = clear_entries(&self.items, confirmed);
        if outcome == ClearOutcome::Cleared {
            self.items = next;
            self.persist()?;
        }
        Ok(outcome)
    }

    fn items(&self) -> &[HistoryItem] {
        &self.items
    }
}
