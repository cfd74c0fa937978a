//! Optional backend capabilities
//!
//! `approximate_size` and `compact_range` only exist on an adapter whose
//! backend implements them. The adapter hands out these handles, which
//! encode the range endpoints before forwarding.

use encodedb_codec::Codec;
use encodedb_core::{ApproximateSize, CompactRange, Value};

use crate::error::Result;
use crate::options::CallOptions;

/// `approximate_size` of an adapter's backend
#[derive(Clone, Copy)]
pub struct SizeEstimator<'a> {
    inner: &'a dyn ApproximateSize,
    codec: &'a Codec,
}

impl<'a> SizeEstimator<'a> {
    pub(crate) fn new(inner: &'a dyn ApproximateSize, codec: &'a Codec) -> Self {
        Self { inner, codec }
    }

    /// Approximate storage size of `[start, end)`, endpoints key-encoded
    pub fn call(
        &self,
        start: impl Into<Value>,
        end: impl Into<Value>,
        options: &CallOptions,
    ) -> Result<u64> {
        let encoders = self.codec.resolve(options.key_encoding.as_ref(), None)?;
        let start = encoders.encode_key(&start.into())?;
        let end = encoders.encode_key(&end.into())?;
        Ok(self.inner.approximate_size(start, end)?)
    }
}

/// `compact_range` of an adapter's backend
#[derive(Clone, Copy)]
pub struct RangeCompactor<'a> {
    inner: &'a dyn CompactRange,
    codec: &'a Codec,
}

impl<'a> RangeCompactor<'a> {
    pub(crate) fn new(inner: &'a dyn CompactRange, codec: &'a Codec) -> Self {
        Self { inner, codec }
    }

    /// Compact `[start, end]`, endpoints key-encoded
    pub fn call(
        &self,
        start: impl Into<Value>,
        end: impl Into<Value>,
        options: &CallOptions,
    ) -> Result<()> {
        let encoders = self.codec.resolve(options.key_encoding.as_ref(), None)?;
        let start = encoders.encode_key(&start.into())?;
        let end = encoders.encode_key(&end.into())?;
        Ok(self.inner.compact_range(start, end)?)
    }
}
