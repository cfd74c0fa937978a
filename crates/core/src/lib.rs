//! Core types and traits for encodedb
//!
//! This crate defines the foundational types shared by every layer:
//! - Value: Application-level datum handed to the encoding adapter
//! - Transport: Encoded byte/string form a backend stores
//! - OptionMap: Presence-preserving operation options
//! - BatchOp: Array-form batch operation
//! - StoreError: Backend error type
//! - Traits: Backend store contract (Store, StoreIterator, StoreBatch)
//! - Supports: Capability advertisement

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod options;
pub mod supports;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use options::{names, OptionMap, RangeBound};
pub use supports::{Supports, APPROXIMATE_SIZE, COMPACT_RANGE};
pub use traits::{
    ApproximateSize, CompactRange, DeferredBatch, RawEntry, Store, StoreBatch, StoreIterator,
};
pub use types::{BatchOp, Transport};
pub use value::Value;
