//! Storage Layer
//!
//! Synchronous key-value persistence seam. The browser build backs it with
//! `window.localStorage`; tests use [`MemoryStorage`].

pub mod codec;

use std::collections::HashMap;

use crate::domain::StoreResult;

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }
}
