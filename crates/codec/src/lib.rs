//! Encoding registry and codec resolution.
//!
//! Every key and value passing through the encoding adapter goes through an
//! [`Encoding`]. Encodings are either named presets from this registry or
//! caller-defined [`CustomEncoding`]s; a [`Codec`] resolves a
//! [`CodecOptions`] pair of them once, and resolves per-call overrides on
//! demand.
//!
//! # Usage
//!
//! ```
//! use encodedb_codec::{Codec, CodecOptions};
//! use encodedb_core::Value;
//!
//! let codec = Codec::new(CodecOptions::new().value_encoding("json")).unwrap();
//! let encoders = codec.encoders();
//!
//! let encoded = encoders.encode_value(&Value::Int(42)).unwrap();
//! let decoded = encoders.decode_value(encoded).unwrap();
//!
//! assert_eq!(decoded, Value::Int(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builtin;
mod codec;
mod config;
mod custom;
mod traits;

use std::sync::Arc;

pub use builtin::{Base64, Binary, Hex, Identity, Json, Utf8};
pub use codec::{Codec, Encoders};
pub use config::{CodecOptions, EncodingSpec, DEFAULT_ENCODING};
pub use custom::CustomEncoding;
pub use traits::{CodecError, Encoding};

/// Get an encoding by name.
///
/// Returns the encoding if recognized, or an error for unknown names.
///
/// # Known Encodings
///
/// - `"utf8"` / `"utf-8"`: text (default)
/// - `"json"`: JSON text
/// - `"binary"`: raw bytes
/// - `"hex"`: hex strings stored as bytes
/// - `"base64"`: base64 strings stored as bytes
/// - `"id"` / `"none"`: pass-through
pub fn get_encoding(name: &str) -> Result<Arc<dyn Encoding>, CodecError> {
    match name {
        "utf8" | "utf-8" => Ok(Arc::new(Utf8)),
        "json" => Ok(Arc::new(Json)),
        "binary" => Ok(Arc::new(Binary)),
        "hex" => Ok(Arc::new(Hex)),
        "base64" => Ok(Arc::new(Base64)),
        "id" | "none" => Ok(Arc::new(Identity)),
        _ => Err(CodecError::UnknownEncoding(name.to_string())),
    }
}
