//! Encoding adapter for encodedb
//!
//! [`EncodingStore`] wraps any [`Store`](encodedb_core::Store) whose native
//! keys and values are byte sequences or strings, and lets callers work with
//! richer [`Value`](encodedb_core::Value)s instead:
//!
//! - keys, values, range bounds and seek targets are encoded on the way in
//! - values (and iterator keys) are decoded on the way out
//! - encodings are set per adapter and can be overridden per call
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use encodedb_codec::CodecOptions;
//! use encodedb_core::Value;
//! use encodedb_encoding::{CallOptions, EncodingStore};
//! use encodedb_storage::MemoryStore;
//!
//! let db = EncodingStore::with_options(
//!     Arc::new(MemoryStore::new()),
//!     CodecOptions::new().value_encoding("json"),
//! )
//! .unwrap();
//!
//! db.put("answer", Value::Int(42), &CallOptions::new()).unwrap();
//! assert_eq!(db.get("answer", &CallOptions::new()).unwrap(), Some(Value::Int(42)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batch;
mod capability;
mod error;
mod iterator;
mod options;
mod store;
pub mod translate;

pub use batch::ChainedBatch;
pub use capability::{RangeCompactor, SizeEstimator};
pub use error::{Error, ErrorKind, Result};
pub use iterator::{EncodingIterator, Entry};
pub use options::CallOptions;
pub use store::EncodingStore;
