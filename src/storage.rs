//! Browser Storage
//!
//! `window.localStorage` behind the `KeyValueStorage` seam. Falls back to an
//! in-memory store when local storage is disabled, so the session still works.

use wasm_bindgen::JsValue;

use recipe_order::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};

#[derive(Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    /// Open local storage, or memory if the browser refuses
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserStorage::Local(storage),
            Err(e) => {
                log::warn!("[STORAGE] {}; order will not survive a reload", e);
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_error(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(|e| StorageError::Read(js_error(&e))),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(|e| StorageError::Write(js_error(&e))),
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }
}
