//! Local Storage
//!
//! `localStorage` backend for the milestone store.

use timeline_core::{KeyValueStore, MilestoneStore, TimelineError, TimelineResult};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> TimelineResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| TimelineError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| TimelineError::Storage("localStorage is disabled".to_string()))
    }
}

fn storage_error(e: JsValue) -> TimelineError {
    TimelineError::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> TimelineResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(storage_error)
    }

    fn write(&self, key: &str, value: &str) -> TimelineResult<()> {
        Self::storage()?.set_item(key, value).map_err(storage_error)
    }
}

/// Milestone store over `localStorage` under `key`
pub fn milestone_store(key: &str) -> MilestoneStore<LocalStorage> {
    MilestoneStore::new(LocalStorage, key)
}
