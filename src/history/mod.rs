pub mod storage;

pub use storage::{FileStorage, Storage};

use chrono::Utc;

use crate::constants::{LINK_STORAGE_KEY, MAX_STORED_LINKS};
use crate::models::StoredLink;

/// On-device history of recently shortened URLs
///
/// Bounded two ways: entries expire 1 hour after creation, and only the 3
/// most recent survive. The whole list is persisted as one JSON array under
/// a single storage key. Storage failures never surface to the caller: they
/// are logged and the cache degrades to "no history", which is a legitimate
/// steady state and intentionally indistinguishable from a fault.
///
/// Runs on a single logical thread with no internal locking; callers issuing
/// overlapping writes must serialize them.
pub struct UrlHistory<S: Storage> {
    storage: S,
}

impl<S: Storage> UrlHistory<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current history, newest first, with expired entries pruned
    ///
    /// Pruning is lazy: when a read drops entries, the filtered list is
    /// written back immediately rather than on a timer.
    pub fn get_all(&self) -> Vec<StoredLink> {
        self.get_all_at(Utc::now().timestamp_millis())
    }

    /// Record a freshly shortened URL, evicting the oldest beyond capacity
    pub fn add(&self, original: &str, shortened: &str) {
        self.add_at(original, shortened, Utc::now().timestamp_millis());
    }

    /// Drop expired entries and persist the compacted list
    pub fn clear_expired(&self) {
        let links = self.get_all();
        self.persist(&links);
    }

    /// Forget the entire history
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(LINK_STORAGE_KEY) {
            tracing::error!("Failed to clear URL history: {}", e);
        }
    }

    fn get_all_at(&self, now_ms: i64) -> Vec<StoredLink> {
        let raw = match self.storage.load(LINK_STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to read URL history: {}", e);
                return Vec::new();
            }
        };
        let Some(raw) = raw else {
            return Vec::new();
        };

        // A corrupt payload reads as empty rather than failing the caller
        let links: Vec<StoredLink> = serde_json::from_str(&raw).unwrap_or_default();

        let fresh: Vec<StoredLink> = links
            .iter()
            .filter(|link| !link.is_expired(now_ms))
            .cloned()
            .collect();

        if fresh.len() != links.len() {
            self.persist(&fresh);
        }

        fresh
    }

    fn add_at(&self, original: &str, shortened: &str, now_ms: i64) {
        let mut links = self.get_all_at(now_ms);
        links.insert(0, StoredLink::new(original, shortened, now_ms));
        links.truncate(MAX_STORED_LINKS);
        self.persist(&links);
    }

    fn persist(&self, links: &[StoredLink]) {
        let raw = match serde_json::to_string(links) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize URL history: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(LINK_STORAGE_KEY, &raw) {
            tracing::error!("Failed to persist URL history: {}", e);
        }
    }
}
