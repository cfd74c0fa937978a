//! Snapshot cursor of the in-memory store

use encodedb_core::{names, OptionMap, RawEntry, StoreError, StoreIterator, StoreResult, Transport};

use crate::memory::shape;
use crate::range::KeyRange;

/// Cursor over a copy of a [`MemoryStore`](crate::MemoryStore) range.
///
/// Entries are copied when the cursor is created; `seek` moves within that
/// copy. `limit` counts emitted entries, across seeks.
#[derive(Debug)]
pub struct MemoryIterator {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    position: usize,
    emitted: usize,
    range: KeyRange,
    keys: bool,
    values: bool,
    key_as_buffer: bool,
    value_as_buffer: bool,
    ended: bool,
}

impl MemoryIterator {
    pub(crate) fn new(
        entries: Vec<(Vec<u8>, Vec<u8>)>,
        range: KeyRange,
        options: &OptionMap,
    ) -> Self {
        Self {
            entries,
            position: 0,
            emitted: 0,
            range,
            keys: options.flag_unless_false(names::KEYS),
            values: options.flag_unless_false(names::VALUES),
            key_as_buffer: options.get_bool(names::KEY_AS_BUFFER).unwrap_or(true),
            value_as_buffer: options.get_bool(names::VALUE_AS_BUFFER).unwrap_or(true),
            ended: false,
        }
    }

    /// Empty transport value in the requested shape
    fn sentinel(as_buffer: bool) -> Transport {
        shape(Vec::new(), as_buffer)
    }
}

impl StoreIterator for MemoryIterator {
    fn next(&mut self) -> StoreResult<Option<RawEntry>> {
        if self.ended {
            return Err(StoreError::storage("cannot call next() after end()"));
        }
        if self.range.limit.is_some_and(|limit| self.emitted >= limit) {
            return Ok(None);
        }
        let Some((key, value)) = self.entries.get(self.position) else {
            return Ok(None);
        };

        let key = if self.keys {
            shape(key.clone(), self.key_as_buffer)
        } else {
            Self::sentinel(self.key_as_buffer)
        };
        let value = if self.values {
            shape(value.clone(), self.value_as_buffer)
        } else {
            Self::sentinel(self.value_as_buffer)
        };

        self.position += 1;
        self.emitted += 1;
        Ok(Some(RawEntry { key, value }))
    }

    fn seek(&mut self, target: Transport, _options: &OptionMap) -> StoreResult<()> {
        if self.ended {
            return Err(StoreError::storage("cannot call seek() after end()"));
        }
        let target = target.as_slice();
        self.position = if self.range.reverse {
            self.entries.partition_point(|(k, _)| k.as_slice() > target)
        } else {
            self.entries.partition_point(|(k, _)| k.as_slice() < target)
        };
        Ok(())
    }

    fn end(&mut self) -> StoreResult<()> {
        if self.ended {
            return Err(StoreError::storage("end() already called on iterator"));
        }
        self.ended = true;
        self.entries.clear();
        Ok(())
    }
}
