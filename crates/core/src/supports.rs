//! Capability advertisement
//!
//! Every store reports what it supports through a [`Supports`] record. The
//! encoding adapter mirrors its backend's record, adjusting only the entries
//! it changes itself.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the optional `approximate_size` capability
pub const APPROXIMATE_SIZE: &str = "approximateSize";
/// Name of the optional `compact_range` capability
pub const COMPACT_RANGE: &str = "compactRange";

/// Feature manifest of a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supports {
    /// Keys may be byte sequences
    pub buffer_keys: bool,
    /// Iterators read from an implicit snapshot
    pub snapshots: bool,
    /// Data survives a close/reopen
    pub permanence: bool,
    /// Iterators support `seek`
    pub seek: bool,
    /// `clear` range delete is implemented
    pub clear: bool,
    /// `get_many` is implemented natively
    pub get_many: bool,
    /// `createIfMissing` open option is honored
    pub create_if_missing: bool,
    /// `errorIfExists` open option is honored
    pub error_if_exists: bool,
    /// Keys and values go through encodings
    pub encodings: bool,
    /// Store-specific methods beyond the common surface, by name
    pub additional_methods: BTreeMap<String, bool>,
}

impl Supports {
    /// Whether an additional method is advertised
    pub fn has_method(&self, name: &str) -> bool {
        self.additional_methods.get(name).copied().unwrap_or(false)
    }
}
