//! Segment map: the concurrent mapping every [`Node`](crate::Node) owns.
//!
//! All data lives in a `HashMap` behind a `RwLock`. Each public operation is
//! one critical section, so callers never hold a lock across calls.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::node::Entry;

#[derive(Debug, Default)]
pub(crate) struct SegmentMap {
    entries: RwLock<HashMap<String, Entry>>,
}

impl SegmentMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // Every critical section is a single map operation, so a guard poisoned
    // by a panicking holder still protects a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the entry at `key`. Node entries are `Arc` handles, so the
    /// clone shares the child.
    pub(crate) fn get(&self, key: &str) -> Option<Entry> {
        self.read().get(key).cloned()
    }

    /// Unconditionally overwrite `key`, returning the previous entry.
    pub(crate) fn set(&self, key: &str, entry: Entry) -> Option<Entry> {
        self.write().insert(key.to_owned(), entry)
    }

    /// Return the entry at `key`, installing `make()` first if it is absent.
    ///
    /// Lookup, creation and installation happen under one write lock: racing
    /// callers all observe the single entry that won.
    pub(crate) fn get_or_insert_with(&self, key: &str, make: impl FnOnce() -> Entry) -> Entry {
        self.write()
            .entry(key.to_owned())
            .or_insert_with(make)
            .clone()
    }

    /// Sorted list of keys.
    pub(crate) fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
