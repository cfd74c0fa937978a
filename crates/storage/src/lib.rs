//! Reference backend for encodedb
//!
//! This crate implements the [`Store`](encodedb_core::Store) contract in
//! memory:
//! - MemoryStore: BTreeMap-based storage behind a RwLock
//! - MemoryIterator: snapshot cursor with range bounds, reverse, limit, seek
//! - KeyRange: range selection from iterator / clear options
//!
//! It is the backend the encoding adapter is exercised against in tests and
//! a working default for embedders that need no persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iterator;
pub mod memory;
pub mod range;

pub use iterator::MemoryIterator;
pub use memory::MemoryStore;
pub use range::KeyRange;
