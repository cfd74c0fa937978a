//! Per-call options

use encodedb_codec::EncodingSpec;
use encodedb_core::{OptionMap, Value};

/// Options of a single adapter call.
///
/// `key_encoding` / `value_encoding` shadow the adapter's encodings for this
/// call only. `fields` are handed to the backend; only the fields the
/// operation owns (range bounds, buffer flags, iterator defaults) are ever
/// rewritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Key encoding override
    pub key_encoding: Option<EncodingSpec>,
    /// Value encoding override
    pub value_encoding: Option<EncodingSpec>,
    /// Options forwarded to the backend
    pub fields: OptionMap,
}

impl CallOptions {
    /// No overrides, no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the key encoding for this call
    pub fn key_encoding(mut self, spec: impl Into<EncodingSpec>) -> Self {
        self.key_encoding = Some(spec.into());
        self
    }

    /// Override the value encoding for this call
    pub fn value_encoding(mut self, spec: impl Into<EncodingSpec>) -> Self {
        self.value_encoding = Some(spec.into());
        self
    }

    /// Set a backend option field
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name, value);
        self
    }
}

impl From<OptionMap> for CallOptions {
    fn from(fields: OptionMap) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }
}
