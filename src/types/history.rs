use serde::{Deserialize, Serialize};

/// A single recorded text input with id and display timestamp.
///
/// `id` is time-of-creation based and strictly increasing; it is the only
/// key used for lookup and deletion. `timestamp` is a locale-formatted
/// display string, informational only, never parsed back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryItem {
    pub id: i64,
    pub text: String,
    pub timestamp: String,
}
