//! Transport-level types shared by the backend contract and the adapter
//!
//! - Transport: the encoded byte-sequence or string form a backend stores
//! - BatchOp: one operation of an array-form batch

use serde::{Deserialize, Serialize};

/// Encoded form of a key or value as stored and returned by a backend.
///
/// Encoders declare which shape they produce (`is_buffer`); backends that
/// honor `asBuffer` deliver reads in the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    /// Byte sequence
    Bytes(Vec<u8>),
    /// String
    Text(String),
}

impl Transport {
    /// Raw bytes of this transport value (UTF-8 for text).
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Transport::Bytes(b) => b,
            Transport::Text(s) => s.as_bytes(),
        }
    }

    /// Consume into raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Transport::Bytes(b) => b,
            Transport::Text(s) => s.into_bytes(),
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the encoded form is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for Transport {
    fn from(b: Vec<u8>) -> Self {
        Transport::Bytes(b)
    }
}

impl From<&[u8]> for Transport {
    fn from(b: &[u8]) -> Self {
        Transport::Bytes(b.to_vec())
    }
}

impl From<String> for Transport {
    fn from(s: String) -> Self {
        Transport::Text(s)
    }
}

impl From<&str> for Transport {
    fn from(s: &str) -> Self {
        Transport::Text(s.to_string())
    }
}

/// One operation of an array-form batch.
///
/// The adapter accepts `BatchOp<Value>` and hands `BatchOp<Transport>` to the
/// backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BatchOp<T> {
    /// Write `value` under `key`
    Put {
        /// Key to write
        key: T,
        /// Value to write
        value: T,
    },
    /// Delete `key`
    Del {
        /// Key to delete
        key: T,
    },
}

impl<T> BatchOp<T> {
    /// Build a put operation
    pub fn put(key: impl Into<T>, value: impl Into<T>) -> Self {
        BatchOp::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build a delete operation
    pub fn del(key: impl Into<T>) -> Self {
        BatchOp::Del { key: key.into() }
    }

    /// The operation's key
    pub fn key(&self) -> &T {
        match self {
            BatchOp::Put { key, .. } | BatchOp::Del { key } => key,
        }
    }

    /// Operation type name (`"put"` or `"del"`)
    pub fn kind(&self) -> &'static str {
        match self {
            BatchOp::Put { .. } => "put",
            BatchOp::Del { .. } => "del",
        }
    }
}
