//! Encoding trait definitions.

use std::fmt;

use encodedb_core::{Transport, Value};

/// An encoding for keys or values.
///
/// Turns application [`Value`]s into [`Transport`] data for the backend and
/// back. Any coercion of values that are not already strings or bytes is the
/// encoding's business.
///
/// # Thread Safety
///
/// Encodings must be `Send + Sync`; one instance is shared by every
/// operation in flight on an adapter.
///
/// # Transport Shape
///
/// `is_buffer` declares whether the transport form is a byte sequence. The
/// adapter uses it to ask backends for reads in the matching shape.
pub trait Encoding: Send + Sync {
    /// Encode a value for the backend.
    fn encode(&self, value: &Value) -> Result<Transport, CodecError>;

    /// Decode data retrieved from the backend.
    ///
    /// Returns an error if the data cannot be decoded by this encoding.
    fn decode(&self, data: Transport) -> Result<Value, CodecError>;

    /// Whether the transport form is a byte sequence.
    fn is_buffer(&self) -> bool;

    /// Encoding name, e.g. `"utf8"`.
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoding")
            .field("name", &self.name())
            .field("buffer", &self.is_buffer())
            .finish()
    }
}

/// Codec errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Encoding a value failed.
    #[error("{0}")]
    Encode(String),

    /// Decoding failed (invalid format for this encoding).
    #[error("{0}")]
    Decode(String),

    /// Unknown encoding name.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Configuration could not be parsed.
    #[error("Invalid codec configuration: {0}")]
    InvalidConfig(String),
}

impl CodecError {
    /// Encode failure with a message
    pub fn encode(message: impl fmt::Display) -> Self {
        CodecError::Encode(message.to_string())
    }

    /// Decode failure with a message
    pub fn decode(message: impl fmt::Display) -> Self {
        CodecError::Decode(message.to_string())
    }
}
