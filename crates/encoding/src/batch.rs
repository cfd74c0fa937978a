//! Encoding chained batch
//!
//! Keys and values are encoded when an operation is staged, so an encode
//! failure surfaces from `put` / `del` and nothing reaches the backend batch
//! for that call.

use std::fmt;

use encodedb_codec::Codec;
use encodedb_core::{OptionMap, StoreBatch, Value};

use crate::error::{Error, Result};
use crate::options::CallOptions;

/// Chained batch that encodes each staged operation
pub struct ChainedBatch<'a> {
    inner: Box<dyn StoreBatch + 'a>,
    codec: &'a Codec,
}

impl<'a> ChainedBatch<'a> {
    pub(crate) fn new(inner: Box<dyn StoreBatch + 'a>, codec: &'a Codec) -> Self {
        Self { inner, codec }
    }

    /// Stage a put. Encodings in `options` apply to this operation only.
    pub fn put(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
        options: &CallOptions,
    ) -> Result<&mut Self> {
        let (key, value) = (key.into(), value.into());
        Error::check_key(&key)?;
        Error::check_value(&value)?;
        let encoders = self
            .codec
            .resolve(options.key_encoding.as_ref(), options.value_encoding.as_ref())?;
        let key = encoders.encode_key(&key)?;
        let value = encoders.encode_value(&value)?;
        self.inner.put(key, value, &options.fields);
        Ok(self)
    }

    /// Stage a delete. A key encoding in `options` applies to this operation only.
    pub fn del(&mut self, key: impl Into<Value>, options: &CallOptions) -> Result<&mut Self> {
        let key = key.into();
        Error::check_key(&key)?;
        let encoders = self.codec.resolve(options.key_encoding.as_ref(), None)?;
        let key = encoders.encode_key(&key)?;
        self.inner.del(key, &options.fields);
        Ok(self)
    }

    /// Drop every staged operation
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    /// Submit the staged operations
    pub fn write(self, options: &OptionMap) -> Result<()> {
        self.inner.write(options)?;
        Ok(())
    }
}

impl fmt::Debug for ChainedBatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedBatch")
            .field("codec", self.codec)
            .finish_non_exhaustive()
    }
}
