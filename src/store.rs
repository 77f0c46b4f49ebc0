//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each request list
//! mirrors its local-storage key; lists only ever grow.

use intake_domain::{
    DesignRequest, LsmRequest, PortalConfig, PriceChange, RequestKind, StoreHoursChange,
};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Store identity and embedded form URL, from the server
    pub portal: PortalConfig,
    pub design_requests: Vec<DesignRequest>,
    pub lsm_requests: Vec<LsmRequest>,
    pub price_changes: Vec<PriceChange>,
    pub store_hours_changes: Vec<StoreHoursChange>,
}

impl AppState {
    /// Read every saved list from local storage
    pub fn load() -> Self {
        Self {
            portal: PortalConfig::default(),
            design_requests: storage::load_records(),
            lsm_requests: storage::load_records(),
            price_changes: storage::load_records(),
            store_hours_changes: storage::load_records(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Per-kind list access
// ========================

/// Request kinds with a list in [`AppState`]
pub trait StoredRecords: RequestKind + Send + Sync {
    fn read_all(store: AppStore) -> Vec<Self>;

    fn push(store: AppStore, record: Self);
}

impl StoredRecords for DesignRequest {
    fn read_all(store: AppStore) -> Vec<Self> {
        store.design_requests().get()
    }

    fn push(store: AppStore, record: Self) {
        store.design_requests().write().push(record);
    }
}

impl StoredRecords for LsmRequest {
    fn read_all(store: AppStore) -> Vec<Self> {
        store.lsm_requests().get()
    }

    fn push(store: AppStore, record: Self) {
        store.lsm_requests().write().push(record);
    }
}

impl StoredRecords for PriceChange {
    fn read_all(store: AppStore) -> Vec<Self> {
        store.price_changes().get()
    }

    fn push(store: AppStore, record: Self) {
        store.price_changes().write().push(record);
    }
}

impl StoredRecords for StoreHoursChange {
    fn read_all(store: AppStore) -> Vec<Self> {
        store.store_hours_changes().get()
    }

    fn push(store: AppStore, record: Self) {
        store.store_hours_changes().write().push(record);
    }
}
