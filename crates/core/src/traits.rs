//! Backend store contract
//!
//! This module defines the traits a byte/string key-value backend implements
//! so the encoding adapter can sit in front of it:
//! - [`Store`]: point operations, batches, iterators, range delete
//! - [`StoreIterator`]: a cursor over transport-level entries
//! - [`StoreBatch`]: a staging object for chained batches
//! - [`ApproximateSize`] / [`CompactRange`]: optional capabilities
//!
//! Backends only ever see [`Transport`] keys and values. Options arrive as an
//! [`OptionMap`] whose field presence must be read as-is.

use crate::error::{StoreError, StoreResult};
use crate::options::OptionMap;
use crate::supports::Supports;
use crate::types::{BatchOp, Transport};

/// Byte/string oriented key-value store.
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait Store: Send + Sync {
    /// Open the store.
    ///
    /// Backends without a lifecycle keep the default, which succeeds.
    fn open(&self, _options: &OptionMap) -> StoreResult<()> {
        Ok(())
    }

    /// Close the store.
    fn close(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn put(&self, key: Transport, value: Transport, options: &OptionMap) -> StoreResult<()>;

    /// Read the value stored under `key`.
    ///
    /// Returns `None` if the key does not exist. `options.asBuffer` selects
    /// whether the value is delivered as bytes or as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, key: Transport, options: &OptionMap) -> StoreResult<Option<Transport>>;

    /// Read several keys at once.
    ///
    /// The result has one slot per key, in order; missing keys are `None`.
    /// The default issues one `get` per key.
    fn get_many(
        &self,
        keys: Vec<Transport>,
        options: &OptionMap,
    ) -> StoreResult<Vec<Option<Transport>>> {
        keys.into_iter().map(|key| self.get(key, options)).collect()
    }

    /// Delete `key`. Deleting a missing key is not an error.
    fn del(&self, key: Transport, options: &OptionMap) -> StoreResult<()>;

    /// Apply an array of operations atomically.
    fn batch(&self, operations: Vec<BatchOp<Transport>>, options: &OptionMap) -> StoreResult<()>;

    /// Start a chained batch.
    ///
    /// The default stages operations in memory and submits them through
    /// [`Store::batch`] on write.
    fn chained_batch(&self) -> Box<dyn StoreBatch + '_> {
        Box::new(DeferredBatch::new(self))
    }

    /// Open a cursor over the entries selected by `options`.
    fn iterator(&self, options: &OptionMap) -> Box<dyn StoreIterator + '_>;

    /// Delete every entry selected by `options` (range bounds, `reverse`,
    /// `limit`).
    fn clear(&self, _options: &OptionMap) -> StoreResult<()> {
        Err(StoreError::NotSupported("clear"))
    }

    /// Feature manifest of this store.
    fn supports(&self) -> Supports {
        Supports::default()
    }

    /// The `approximate_size` capability, if this store has one.
    fn as_approximate_size(&self) -> Option<&dyn ApproximateSize> {
        None
    }

    /// The `compact_range` capability, if this store has one.
    fn as_compact_range(&self) -> Option<&dyn CompactRange> {
        None
    }
}

/// One entry produced by a [`StoreIterator`].
///
/// When the iterator was opened with `keys: false` (or `values: false`) the
/// corresponding field carries whatever sentinel the backend chooses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Encoded key
    pub key: Transport,
    /// Encoded value
    pub value: Transport,
}

impl RawEntry {
    /// Build an entry
    pub fn new(key: impl Into<Transport>, value: impl Into<Transport>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Cursor over a store's entries.
///
/// A cursor is driven by a single caller at a time.
pub trait StoreIterator: Send {
    /// Advance the cursor. `None` means the cursor is exhausted.
    fn next(&mut self) -> StoreResult<Option<RawEntry>>;

    /// Reposition the cursor at `target`.
    fn seek(&mut self, _target: Transport, _options: &OptionMap) -> StoreResult<()> {
        Err(StoreError::NotSupported("seek"))
    }

    /// Release the cursor.
    fn end(&mut self) -> StoreResult<()> {
        Ok(())
    }
}

/// Staging object of a chained batch.
pub trait StoreBatch: Send {
    /// Stage a write
    fn put(&mut self, key: Transport, value: Transport, options: &OptionMap);

    /// Stage a delete
    fn del(&mut self, key: Transport, options: &OptionMap);

    /// Drop every staged operation
    fn clear(&mut self);

    /// Commit the staged operations
    fn write(self: Box<Self>, options: &OptionMap) -> StoreResult<()>;
}

/// Optional capability: estimate the on-disk size of a key range.
pub trait ApproximateSize: Send + Sync {
    /// Approximate size in bytes of the range `[start, end)`.
    fn approximate_size(&self, start: Transport, end: Transport) -> StoreResult<u64>;
}

/// Optional capability: compact a key range.
pub trait CompactRange: Send + Sync {
    /// Compact the range `[start, end]`.
    fn compact_range(&self, start: Transport, end: Transport) -> StoreResult<()>;
}

/// Chained batch that collects operations and submits them through
/// [`Store::batch`] when written.
pub struct DeferredBatch<'a, S: Store + ?Sized> {
    store: &'a S,
    operations: Vec<BatchOp<Transport>>,
}

impl<'a, S: Store + ?Sized> DeferredBatch<'a, S> {
    /// Start an empty batch against `store`
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            operations: Vec::new(),
        }
    }

    /// Number of staged operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether nothing is staged
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<S: Store + ?Sized> StoreBatch for DeferredBatch<'_, S> {
    fn put(&mut self, key: Transport, value: Transport, _options: &OptionMap) {
        self.operations.push(BatchOp::Put { key, value });
    }

    fn del(&mut self, key: Transport, _options: &OptionMap) {
        self.operations.push(BatchOp::Del { key });
    }

    fn clear(&mut self) {
        self.operations.clear();
    }

    fn write(self: Box<Self>, options: &OptionMap) -> StoreResult<()> {
        let DeferredBatch { store, operations } = *self;
        store.batch(operations, options)
    }
}
