//! Error types for the encoding adapter.
//!
//! Every failure surfaced by the adapter is one of three kinds:
//!
//! | Kind | Variant | Source |
//! |------|---------|--------|
//! | Store | `Store` | the backend call itself; forwarded verbatim |
//! | Decode | `Decode` | data retrieved from the backend could not be decoded |
//! | Encode | `Codec` | an input could not be encoded, or an encoding name is unknown |
//! | Encode | `InvalidKey` / `InvalidValue` | a key or put value was `Null` or `Undefined` |
//!
//! Callers branch on [`Error::kind`] to tell "my data is unreadable by this
//! codec" apart from "the store is broken".
//!
//! # Example
//!
//! ```ignore
//! match db.get("foo", &CallOptions::default()) {
//!     Ok(value) => { /* handle value */ }
//!     Err(e) if e.is_decode_failure() => {
//!         println!("stored data is malformed: {}", e);
//!     }
//!     Err(e) => {
//!         println!("store unavailable: {}", e);
//!     }
//! }
//! ```

use encodedb_codec::CodecError;
use encodedb_core::{StoreError, Value};
use thiserror::Error;
use tracing::debug;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Backend failure
    Store,
    /// Decode failure on retrieved data
    Decode,
    /// Encode or encoding-resolution failure
    Encode,
}

/// Errors returned by the encoding adapter
#[derive(Debug, Error)]
pub enum Error {
    /// Backend error, message untouched
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Data retrieved from the backend could not be decoded
    #[error("{message}")]
    Decode {
        /// Message of the underlying decode error
        message: String,
    },

    /// Encoding an input failed, or an encoding could not be resolved
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A key was `Null` or `Undefined`
    #[error("key cannot be `null` or `undefined`")]
    InvalidKey,

    /// A put value was `Null` or `Undefined`
    #[error("value cannot be `null` or `undefined`")]
    InvalidValue,
}

impl Error {
    /// Decode failure carrying the decoder's message
    pub(crate) fn decode(err: CodecError) -> Self {
        let message = err.to_string();
        debug!(target: "encodedb::encoding", error = %message, "Decode failure");
        Error::Decode { message }
    }

    /// Which of the three error kinds this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Store(_) => ErrorKind::Store,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Codec(_) | Error::InvalidKey | Error::InvalidValue => ErrorKind::Encode,
        }
    }

    /// Stable error name
    pub fn name(&self) -> &'static str {
        match self {
            Error::Store(_) => "StoreError",
            Error::Decode { .. } => "EncodingError",
            Error::Codec(_) => "CodecError",
            Error::InvalidKey => "InvalidKeyError",
            Error::InvalidValue => "InvalidValueError",
        }
    }

    /// Reject a `Null` or `Undefined` key before it is encoded
    pub(crate) fn check_key(key: &Value) -> Result<()> {
        if key.is_nullish() {
            return Err(Error::InvalidKey);
        }
        Ok(())
    }

    /// Reject a `Null` or `Undefined` put value before it is encoded
    pub(crate) fn check_value(value: &Value) -> Result<()> {
        if value.is_nullish() {
            return Err(Error::InvalidValue);
        }
        Ok(())
    }

    /// Whether stored data could not be decoded
    pub fn is_decode_failure(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// The backend error, if this is one
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}
