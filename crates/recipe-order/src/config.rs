//! Catalog Configuration
//!
//! Tunables for the catalog, stored as JSON next to the orders.
//! Every field has a default, so a partial or missing record is fine.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStorage;

/// Base key for the persisted recipe order
pub const DEFAULT_STORAGE_KEY: &str = "meal-planner-recipe-order";
/// Key holding the serialized [`CatalogConfig`]
pub const CONFIG_STORAGE_KEY: &str = "meal-planner-config";

/// How the catalog is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One flat grid in the global order
    #[default]
    Grid,
    /// One tab per category, each with its own order
    Tabs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base key for saved orders; fixed, never read from stored config
    #[serde(skip, default = "default_storage_key")]
    pub storage_key: String,
    /// Pointer travel (px) before a press becomes a drag
    pub activation_distance_px: f64,
    /// Delay before the closed detail view forgets its recipe
    pub selection_clear_delay_ms: u32,
    pub view_mode: ViewMode,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            activation_distance_px: 8.0,
            selection_clear_delay_ms: 200,
            view_mode: ViewMode::Grid,
        }
    }
}

impl CatalogConfig {
    /// Read the stored config; anything unreadable yields the defaults
    pub fn load<S: KeyValueStorage>(storage: &S) -> Self {
        match storage.get(CONFIG_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring malformed config: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] Failed to read config: {}", e);
                Self::default()
            }
        }
    }

    /// Fire-and-forget write, like the order itself
    pub fn save<S: KeyValueStorage>(&self, storage: &S) {
        let raw = match serde_json::to_string(self) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[CONFIG] Failed to encode config: {}", e);
                return;
            }
        };
        if let Err(e) = storage.set(CONFIG_STORAGE_KEY, &raw) {
            log::warn!("[CONFIG] Failed to save config: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_when_missing() {
        let config = CatalogConfig::load(&MemoryStorage::new());
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.storage_key, "meal-planner-recipe-order");
        assert_eq!(config.activation_distance_px, 8.0);
        assert_eq!(config.selection_clear_delay_ms, 200);
    }

    #[test]
    fn test_partial_override() {
        let storage = MemoryStorage::new();
        storage
            .set(CONFIG_STORAGE_KEY, r#"{"view_mode":"tabs","activation_distance_px":12}"#)
            .unwrap();
        let config = CatalogConfig::load(&storage);
        assert_eq!(config.view_mode, ViewMode::Tabs);
        assert_eq!(config.activation_distance_px, 12.0);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_stored_storage_key_is_ignored() {
        let storage = MemoryStorage::new();
        storage
            .set(CONFIG_STORAGE_KEY, r#"{"storage_key":"","view_mode":"tabs"}"#)
            .unwrap();
        let config = CatalogConfig::load(&storage);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.view_mode, ViewMode::Tabs);

        config.save(&storage);
        let raw = storage.get(CONFIG_STORAGE_KEY).unwrap().unwrap_or_default();
        assert!(!raw.contains("storage_key"));
    }

    #[test]
    fn test_corrupt_falls_back() {
        let storage = MemoryStorage::new();
        storage.set(CONFIG_STORAGE_KEY, "{view_mode:").unwrap();
        assert_eq!(CatalogConfig::load(&storage), CatalogConfig::default());
    }

    #[test]
    fn test_save_roundtrip() {
        let storage = MemoryStorage::new();
        let config = CatalogConfig {
            view_mode: ViewMode::Tabs,
            ..CatalogConfig::default()
        };
        config.save(&storage);
        assert_eq!(CatalogConfig::load(&storage), config);
    }
}
