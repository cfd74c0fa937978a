//! encodedb - key/value encoding over byte and string stores
//!
//! encodedb wraps a store whose native keys and values are byte sequences or
//! strings, and lets callers use numbers, objects, arrays and other values as
//! keys and values. Conversion goes through encodings: named presets
//! (`utf8`, `json`, `binary`, `hex`, `base64`, `id`) or caller-defined ones.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use encodedb::{CallOptions, CodecOptions, EncodingStore, MemoryStore, Value};
//!
//! let db = EncodingStore::with_options(
//!     Arc::new(MemoryStore::new()),
//!     CodecOptions::new().key_encoding("json").value_encoding("json"),
//! )
//! .unwrap();
//!
//! db.put(1, Value::Bool(true), &CallOptions::new()).unwrap();
//! assert_eq!(db.get(1, &CallOptions::new()).unwrap(), Some(Value::Bool(true)));
//! ```
//!
//! # Architecture
//!
//! - `encodedb-core`: value model and the backend [`Store`] contract
//! - `encodedb-codec`: encodings and codec resolution
//! - `encodedb-storage`: [`MemoryStore`], an in-memory backend
//! - `encodedb-encoding`: the [`EncodingStore`] adapter

pub use encodedb_codec::{
    get_encoding, Codec, CodecError, CodecOptions, CustomEncoding, Encoders, Encoding,
    EncodingSpec, DEFAULT_ENCODING,
};
pub use encodedb_core::{
    names, ApproximateSize, BatchOp, CompactRange, OptionMap, RangeBound, RawEntry, Store,
    StoreBatch, StoreError, StoreIterator, StoreResult, Supports, Transport, Value,
    APPROXIMATE_SIZE, COMPACT_RANGE,
};
pub use encodedb_encoding::{
    CallOptions, ChainedBatch, EncodingIterator, EncodingStore, Entry, Error, ErrorKind,
    RangeCompactor, Result, SizeEstimator,
};
pub use encodedb_storage::MemoryStore;
