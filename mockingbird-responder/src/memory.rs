//! Insertion-ordered item → info store behind the remember/recall/forget
//! intents.
//!
//! The grammar core never touches this; it belongs entirely to the
//! dispatcher side of the system. Entries keep their insertion order so
//! "this is what I know" listings read back in the order they were taught.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from persisting or restoring a memory store.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Filesystem read/write failure.
    #[error("failed to access memory file: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a valid memory snapshot.
    #[error("failed to parse memory file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The store could not be serialized.
    #[error("failed to serialize memory: {0}")]
    Serialize(#[from] ron::Error),
}

/// One remembered item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Entry {
    item: String,
    info: String,
}

/// A simple associative memory: item → info, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `info` under `item`, replacing any previous info for the
    /// same item.
    pub fn remember(&mut self, item: impl Into<String>, info: impl Into<String>) {
        let item = item.into();
        let info = info.into();

        match self.entries.iter_mut().find(|entry| entry.item == item) {
            Some(entry) => entry.info = info,
            None => self.entries.push(Entry { item, info }),
        }
    }

    /// Look up the info stored under `item`.
    pub fn recall(&self, item: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.info.as_str())
    }

    /// Forget `item`. Returns whether anything was forgotten.
    pub fn forget(&mut self, item: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.item != item);
        self.entries.len() != before
    }

    /// The remembered items, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.item.as_str())
    }

    /// Whether nothing has been remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the store to `path` as RON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MemoryError> {
        let serialized = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, serialized)?;
        Ok(())
    }

    /// Restore a store previously written by [`MemoryStore::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MemoryError> {
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_and_recalls() {
        let mut memory = MemoryStore::new();
        memory.remember("my dog", "named rex");

        assert_eq!(memory.recall("my dog"), Some("named rex"));
        assert_eq!(memory.recall("my cat"), None);
    }

    #[test]
    fn remembering_again_replaces_the_info() {
        let mut memory = MemoryStore::new();
        memory.remember("my dog", "named rex");
        memory.remember("my dog", "named bandit");

        assert_eq!(memory.recall("my dog"), Some("named bandit"));
        assert_eq!(memory.items().count(), 1);
    }

    #[test]
    fn forgetting_removes_the_entry() {
        let mut memory = MemoryStore::new();
        memory.remember("my dog", "named rex");

        assert!(memory.forget("my dog"));
        assert!(!memory.forget("my dog"));
        assert!(memory.is_empty());
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut memory = MemoryStore::new();
        memory.remember("b", "2");
        memory.remember("a", "1");
        memory.remember("c", "3");

        let items: Vec<_> = memory.items().collect();
        assert_eq!(items, ["b", "a", "c"]);
    }

    #[test]
    fn survives_a_save_load_round_trip() {
        let mut memory = MemoryStore::new();
        memory.remember("my dog", "named rex");
        memory.remember("the code", "1234");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.ron");
        memory.save(&path).unwrap();

        let restored = MemoryStore::load(&path).unwrap();
        assert_eq!(restored, memory);
    }

    #[test]
    fn loading_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.ron");
        std::fs::write(&path, "not ron at all }{").unwrap();

        assert!(matches!(
            MemoryStore::load(&path),
            Err(MemoryError::Parse(_))
        ));
    }
}
