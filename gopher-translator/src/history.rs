//! Translation history
//!
//! Records every top-level translation keyed by its original input. A later translation
//! of the same input replaces the earlier one. Listings are always sorted by the
//! original text, compared byte by byte.
//!
//! # Example
//!
//! ```
//! use gopher_translator::HistoryStore;
//!
//! let history = HistoryStore::new();
//! history.record("square", "aresquogo");
//! history.record("alien", "galien");
//!
//! let entries = history.snapshot();
//! assert_eq!(entries[0].original, "alien");
//! assert_eq!(entries[1].original, "square");
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single original → translated pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    pub translated: String,
}

impl HistoryEntry {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        HistoryEntry {
            original: original.into(),
            translated: translated.into(),
        }
    }
}

/// Serialized as a one-key object: `{"<original>": "<translated>"}`
impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.original, &self.translated)?;
        map.end()
    }
}

/// Thread-safe store of translations, shared between request handlers.
///
/// A `BTreeMap` keeps the keys in byte-wise order, so a snapshot is a single in-order
/// walk taken while holding the lock.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        HistoryStore {
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Insert a translation, replacing any earlier one for the same original.
    pub fn record(&self, original: &str, translated: &str) {
        self.lock()
            .insert(original.to_owned(), translated.to_owned());
    }

    /// Every entry, sorted by original.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.lock()
            .iter()
            .map(|(original, translated)| HistoryEntry::new(original, translated))
            .collect()
    }

    /// Remove every entry.
    pub fn reset(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Inserts and clears never leave the map half-written, even when poisoned.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
