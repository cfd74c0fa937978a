//! Encoding Adapter Test Suite
//!
//! Exercises `EncodingStore` against a recording backend double (to check
//! exactly what reaches the backend) and against `MemoryStore` (to check
//! end-to-end behaviour).
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test encoding_adapter
//!
//! # Iterator tests only
//! cargo test --test encoding_adapter iterator::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod iterator;
mod memory_backend;
mod reads;
