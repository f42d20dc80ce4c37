//! Order Persistence Adapter
//!
//! Reads and writes an ordered list of identifiers under a fixed key.
//! The stored value is a bare JSON array of strings.
//! Both directions fail soft: a bad read is "no saved order", a failed write
//! only costs durability across reloads.

use crate::storage::KeyValueStorage;

/// Storage key for one category scope, derived from the base key
pub fn scoped_key(base: &str, segment: &str) -> String {
    format!("{}:{}", base, segment)
}

pub struct OrderPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> OrderPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Saved order, or `None` when missing, unreadable, or not an array of strings
    pub fn load(&self) -> Option<Vec<String>> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("[ORDER] No saved order under '{}'", self.key);
                return None;
            }
            Err(e) => {
                log::warn!("[ORDER] Failed to read '{}': {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => {
                log::debug!("[ORDER] Loaded {} ids from '{}'", ids.len(), self.key);
                Some(ids)
            }
            Err(e) => {
                log::warn!("[ORDER] Ignoring malformed order under '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Fire-and-forget write; failures are logged and swallowed
    pub fn save(&self, ids: &[String]) {
        let raw = match serde_json::to_string(ids) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[ORDER] Failed to encode order for '{}': {}", self.key, e);
                return;
            }
        };
        match self.storage.set(&self.key, &raw) {
            Ok(()) => log::debug!("[ORDER] Saved {} ids to '{}'", ids.len(), self.key),
            Err(e) => log::warn!("[ORDER] Failed to save order to '{}': {}", self.key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_key_is_none() {
        let persistence = OrderPersistence::new(MemoryStorage::new(), "order");
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let persistence = OrderPersistence::new(storage.clone(), "order");
        persistence.save(&ids(&["b", "a", "c"]));

        assert_eq!(storage.get("order").unwrap().as_deref(), Some(r#"["b","a","c"]"#));
        assert_eq!(persistence.load(), Some(ids(&["b", "a", "c"])));
    }

    #[test]
    fn test_malformed_values_are_none() {
        let storage = MemoryStorage::new();
        let persistence = OrderPersistence::new(storage.clone(), "order");

        for raw in ["not json", "{\"a\":1}", "[1,2,3]", "[\"a\",null]", "\"a\"", ""] {
            storage.set("order", raw).unwrap();
            assert_eq!(persistence.load(), None, "raw value {:?}", raw);
        }
    }

    #[test]
    fn test_empty_array_loads_as_empty() {
        let storage = MemoryStorage::new();
        storage.set("order", "[]").unwrap();
        let persistence = OrderPersistence::new(storage, "order");
        assert_eq!(persistence.load(), Some(Vec::new()));
    }

    #[test]
    fn test_broken_storage_fails_soft() {
        let persistence = OrderPersistence::new(BrokenStorage, "order");
        assert_eq!(persistence.load(), None);
        persistence.save(&ids(&["a"]));
    }

    #[test]
    fn test_scoped_key() {
        assert_eq!(scoped_key("meal-planner-recipe-order", "lunch"), "meal-planner-recipe-order:lunch");
    }
}
