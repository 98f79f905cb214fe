//! Browser Storage
//!
//! `window.localStorage` behind the core key-value seam.

use appointment_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn backend() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::backend()?.get_item(key).map_err(js_error)
    }

    // Quota errors surface here as a DOMException
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        Self::backend()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
