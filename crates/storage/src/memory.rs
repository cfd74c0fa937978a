//! MemoryStore: in-memory backend with an ordered BTreeMap
//!
//! This module implements the [`Store`] contract using:
//! - `BTreeMap<Vec<u8>, Vec<u8>>` for ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Bytes at rest**: keys and values are kept as raw bytes whatever shape
//!   they arrived in; reads are shaped by `asBuffer` / `keyAsBuffer` /
//!   `valueAsBuffer` (all default to bytes)
//! - **Snapshot iterators**: an iterator copies its range when created, so
//!   writes made afterwards are not visible to it
//! - **Atomic batches**: a batch is applied under a single write lock

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use encodedb_core::{
    names, ApproximateSize, BatchOp, OptionMap, Store, StoreIterator, StoreResult, Supports,
    Transport, APPROXIMATE_SIZE,
};

use crate::iterator::MemoryIterator;
use crate::range::KeyRange;

/// Deliver `data` as bytes or as (lossy) text
pub(crate) fn shape(data: Vec<u8>, as_buffer: bool) -> Transport {
    if as_buffer {
        Transport::Bytes(data)
    } else {
        match String::from_utf8(data) {
            Ok(s) => Transport::Text(s),
            Err(e) => Transport::Text(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}

/// In-memory store
///
/// Cloning a `MemoryStore` yields another handle onto the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Raw bytes stored under `key`, bypassing option handling
    pub fn raw_get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.read().get(key).cloned()
    }

    /// Apply a batch of writes and deletes atomically.
    ///
    /// All operations are applied under one write lock acquisition, so no
    /// reader or iterator snapshot can observe a partial batch.
    fn apply_batch(&self, operations: Vec<BatchOp<Transport>>) {
        let mut data = self.data.write();
        for op in operations {
            match op {
                BatchOp::Put { key, value } => {
                    data.insert(key.into_bytes(), value.into_bytes());
                }
                BatchOp::Del { key } => {
                    data.remove(key.as_slice());
                }
            }
        }
    }
}

impl Store for MemoryStore {
    fn put(&self, key: Transport, value: Transport, _options: &OptionMap) -> StoreResult<()> {
        self.data.write().insert(key.into_bytes(), value.into_bytes());
        Ok(())
    }

    fn get(&self, key: Transport, options: &OptionMap) -> StoreResult<Option<Transport>> {
        let as_buffer = options.get_bool(names::AS_BUFFER).unwrap_or(true);
        let data = self.data.read();
        Ok(data
            .get(key.as_slice())
            .map(|value| shape(value.clone(), as_buffer)))
    }

    fn get_many(
        &self,
        keys: Vec<Transport>,
        options: &OptionMap,
    ) -> StoreResult<Vec<Option<Transport>>> {
        let as_buffer = options.get_bool(names::AS_BUFFER).unwrap_or(true);
        // One read lock for the whole lookup
        let data = self.data.read();
        Ok(keys
            .iter()
            .map(|key| {
                data.get(key.as_slice())
                    .map(|value| shape(value.clone(), as_buffer))
            })
            .collect())
    }

    fn del(&self, key: Transport, _options: &OptionMap) -> StoreResult<()> {
        self.data.write().remove(key.as_slice());
        Ok(())
    }

    fn batch(&self, operations: Vec<BatchOp<Transport>>, _options: &OptionMap) -> StoreResult<()> {
        self.apply_batch(operations);
        Ok(())
    }

    fn iterator(&self, options: &OptionMap) -> Box<dyn StoreIterator + '_> {
        let range = KeyRange::from_options(options);
        let entries = range.select(&self.data.read());
        Box::new(MemoryIterator::new(entries, range, options))
    }

    fn clear(&self, options: &OptionMap) -> StoreResult<()> {
        let range = KeyRange::from_options(options);
        let mut data = self.data.write();
        let keys = range.select_keys(&data);
        for key in &keys {
            data.remove(key);
        }
        debug!(target: "encodedb::storage", removed = keys.len(), "Range cleared");
        Ok(())
    }

    fn supports(&self) -> Supports {
        let mut supports = Supports {
            buffer_keys: true,
            snapshots: true,
            permanence: false,
            seek: true,
            clear: true,
            get_many: true,
            ..Supports::default()
        };
        supports
            .additional_methods
            .insert(APPROXIMATE_SIZE.to_string(), true);
        supports
    }

    fn as_approximate_size(&self) -> Option<&dyn ApproximateSize> {
        Some(self)
    }
}

impl ApproximateSize for MemoryStore {
    /// Sum of key and value lengths in `[start, end)`.
    fn approximate_size(&self, start: Transport, end: Transport) -> StoreResult<u64> {
        let data = self.data.read();
        let size = data
            .range(start.into_bytes()..)
            .take_while(|(k, _)| k.as_slice() < end.as_slice())
            .map(|(k, v)| (k.len() + v.len()) as u64)
            .sum();
        Ok(size)
    }
}
