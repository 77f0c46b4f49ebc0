//! Local Record Log
//!
//! Each request kind is kept as one append-only JSON array under its storage
//! key. The backing store is abstract: the browser plugs in `localStorage`,
//! tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{DomainError, DomainResult};
use crate::kind::RequestKind;

/// String key/value store with `localStorage` semantics
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// In-memory storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append-only record lists, one per [`RequestKind`]
///
/// There is no update or delete: records change status only in the back
/// office, which this log never sees.
#[derive(Debug, Clone)]
pub struct RecordLog<S> {
    storage: S,
}

impl<S: KeyValueStorage> RecordLog<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All records of kind `K` in submission order. A missing key is an empty list.
    pub fn list<K: RequestKind>(&self) -> DomainResult<Vec<K>> {
        match self.storage.get_item(K::STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| DomainError::Corrupt {
                key: K::STORAGE_KEY,
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Append one record and return the new length
    pub fn append<K: RequestKind>(&self, record: &K) -> DomainResult<usize> {
        let mut records = self.list::<K>()?;
        records.push(record.clone());
        let raw = serde_json::to_string(&records)?;
        self.storage.set_item(K::STORAGE_KEY, &raw)?;
        Ok(records.len())
    }

    pub fn find_by_id<K: RequestKind>(&self, id: &str) -> DomainResult<Option<K>> {
        Ok(self
            .list::<K>()?
            .into_iter()
            .find(|record| record.id().as_str() == id))
    }
}
