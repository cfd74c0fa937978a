//! Decoding iterator
//!
//! Wraps a backend [`StoreIterator`] and decodes each entry with the
//! encoders resolved when the iterator was created. Fields disabled with
//! `keys: false` / `values: false` are never handed to a decoder and come out
//! as `None`.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use encodedb_codec::{Encoders, Encoding};
use encodedb_core::{RawEntry, StoreIterator, Value};

use crate::error::{Error, Result};
use crate::options::CallOptions;

/// A decoded iterator entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Decoded key, `None` when keys are disabled
    pub key: Option<Value>,
    /// Decoded value, `None` when values are disabled
    pub value: Option<Value>,
}

/// Iterator over decoded entries.
///
/// Yields `Err` for a backend failure or an entry that cannot be decoded; no
/// partial entry is produced in that case.
pub struct EncodingIterator<'a> {
    inner: Box<dyn StoreIterator + 'a>,
    encoders: Encoders,
    keys: bool,
    values: bool,
}

impl<'a> EncodingIterator<'a> {
    pub(crate) fn new(
        inner: Box<dyn StoreIterator + 'a>,
        encoders: Encoders,
        keys: bool,
        values: bool,
    ) -> Self {
        Self {
            inner,
            encoders,
            keys,
            values,
        }
    }

    fn step(&mut self) -> Result<Option<Entry>> {
        let Some(RawEntry { key, value }) = self.inner.next()? else {
            return Ok(None);
        };
        let key = if self.keys {
            Some(self.encoders.decode_key(key).map_err(Error::decode)?)
        } else {
            None
        };
        let value = if self.values {
            Some(self.encoders.decode_value(value).map_err(Error::decode)?)
        } else {
            None
        };
        Ok(Some(Entry { key, value }))
    }

    /// Reposition the backend cursor at `target`.
    ///
    /// The target goes through the iterator's key encoding, or through the
    /// key encoding override in `options`. `Null` and `Undefined` targets are
    /// encoded like any other value.
    pub fn seek(&mut self, target: impl Into<Value>, options: &CallOptions) -> Result<()> {
        let key_encoding: Arc<dyn Encoding> = match &options.key_encoding {
            Some(spec) => spec.resolve()?,
            None => Arc::clone(&self.encoders.key),
        };
        let target = key_encoding.encode(&target.into())?;
        trace!(target: "encodedb::encoding", encoding = key_encoding.name(), "Seek");
        self.inner.seek(target, &options.fields)?;
        Ok(())
    }

    /// Release the backend cursor.
    pub fn end(mut self) -> Result<()> {
        self.inner.end()?;
        Ok(())
    }
}

impl Iterator for EncodingIterator<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

impl fmt::Debug for EncodingIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingIterator")
            .field("encoders", &self.encoders)
            .field("keys", &self.keys)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
