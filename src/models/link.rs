use serde::{Deserialize, Serialize};

use crate::constants::LINK_TTL_MS;

/// A shortened link kept in the on-device history
///
/// Field names match the persisted JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLink {
    /// Creation-time epoch milliseconds, rendered as a string
    pub id: String,
    pub original: String,
    pub shortened: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
}

impl StoredLink {
    pub fn new(original: &str, shortened: &str, now_ms: i64) -> Self {
        Self {
            id: now_ms.to_string(),
            original: original.to_string(),
            shortened: shortened.to_string(),
            timestamp: now_ms,
        }
    }

    /// An entry expires once its age reaches the TTL
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp >= LINK_TTL_MS
    }
}
