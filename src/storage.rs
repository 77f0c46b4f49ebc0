//! Browser Local Storage
//!
//! `window.localStorage` behind the domain's [`KeyValueStorage`] trait, so the
//! record log logic is the same one the unit tests exercise.

use intake_domain::{DomainError, DomainResult, KeyValueStorage, RecordLog, RequestKind};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> DomainResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", value))
}

pub fn record_log() -> RecordLog<LocalStorage> {
    RecordLog::new(LocalStorage)
}

/// Saved records of kind `K`; unreadable data is logged and shown as empty
pub fn load_records<K: RequestKind>() -> Vec<K> {
    match record_log().list::<K>() {
        Ok(records) => {
            web_sys::console::log_1(
                &format!("[STORAGE] Loaded {} {} record(s)", records.len(), K::LABEL).into(),
            );
            records
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[STORAGE] {}", e).into());
            Vec::new()
        }
    }
}
