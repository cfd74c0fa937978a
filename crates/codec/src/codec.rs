//! Codec resolution
//!
//! A [`Codec`] resolves its [`CodecOptions`] once, at construction, into a
//! default [`Encoders`] pair. Operations that carry their own encodings get a
//! freshly resolved pair for that call only; the codec itself never changes.

use std::sync::Arc;

use encodedb_core::{Transport, Value};

use super::config::{CodecOptions, EncodingSpec};
use super::traits::{CodecError, Encoding};

/// Resolved key and value encodings.
#[derive(Debug, Clone)]
pub struct Encoders {
    /// Encoding for keys
    pub key: Arc<dyn Encoding>,
    /// Encoding for values
    pub value: Arc<dyn Encoding>,
}

impl Encoders {
    /// Pair two resolved encodings
    pub fn new(key: Arc<dyn Encoding>, value: Arc<dyn Encoding>) -> Self {
        Self { key, value }
    }

    /// Encode a key
    pub fn encode_key(&self, key: &Value) -> Result<Transport, CodecError> {
        self.key.encode(key)
    }

    /// Encode a value
    pub fn encode_value(&self, value: &Value) -> Result<Transport, CodecError> {
        self.value.encode(value)
    }

    /// Decode a key read from the backend
    pub fn decode_key(&self, data: Transport) -> Result<Value, CodecError> {
        self.key.decode(data)
    }

    /// Decode a value read from the backend
    pub fn decode_value(&self, data: Transport) -> Result<Value, CodecError> {
        self.value.decode(data)
    }

    /// Whether keys travel as byte sequences
    pub fn key_as_buffer(&self) -> bool {
        self.key.is_buffer()
    }

    /// Whether values travel as byte sequences
    pub fn value_as_buffer(&self) -> bool {
        self.value.is_buffer()
    }
}

/// Instance-level codec of an adapter.
#[derive(Debug, Clone)]
pub struct Codec {
    options: CodecOptions,
    encoders: Encoders,
}

impl Codec {
    /// Resolve `options` into a codec.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownEncoding`] if either name is unknown.
    pub fn new(options: CodecOptions) -> Result<Self, CodecError> {
        let encoders = Encoders::new(
            options.key_encoding.resolve()?,
            options.value_encoding.resolve()?,
        );
        Ok(Self { options, encoders })
    }

    /// Options this codec was built from
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Default encoders
    pub fn encoders(&self) -> &Encoders {
        &self.encoders
    }

    /// Encoders for a single call.
    ///
    /// Each override shadows the corresponding default for this call only.
    /// Without overrides this is a cheap clone of the defaults.
    pub fn resolve(
        &self,
        key: Option<&EncodingSpec>,
        value: Option<&EncodingSpec>,
    ) -> Result<Encoders, CodecError> {
        let key = match key {
            Some(spec) => spec.resolve()?,
            None => Arc::clone(&self.encoders.key),
        };
        let value = match value {
            Some(spec) => spec.resolve()?,
            None => Arc::clone(&self.encoders.value),
        };
        Ok(Encoders { key, value })
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            options: CodecOptions::default(),
            encoders: Encoders::new(
                Arc::new(super::builtin::Utf8),
                Arc::new(super::builtin::Utf8),
            ),
        }
    }
}
