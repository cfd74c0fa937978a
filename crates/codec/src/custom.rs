//! Caller-defined encodings.

use std::fmt;
use std::sync::Arc;

use encodedb_core::{Transport, Value};

use super::builtin::Identity;
use super::traits::{CodecError, Encoding};

type EncodeFn = dyn Fn(&Value) -> Result<Transport, CodecError> + Send + Sync;
type DecodeFn = dyn Fn(Transport) -> Result<Value, CodecError> + Send + Sync;

/// Encoding assembled from caller-supplied functions.
///
/// Either function may be omitted; an omitted function behaves like the
/// [`Identity`] encoding. `buffer` defaults to `false`.
///
/// # Example
///
/// ```
/// use encodedb_codec::{CustomEncoding, Encoding};
/// use encodedb_core::{Transport, Value};
///
/// let prefixed = CustomEncoding::new("prefixed")
///     .with_encode(|v| Ok(Transport::Text(format!("encoded_{}", v.to_text()))));
///
/// let encoded = prefixed.encode(&Value::Int(3)).unwrap();
/// assert_eq!(encoded, Transport::from("encoded_3"));
/// ```
#[derive(Clone)]
pub struct CustomEncoding {
    name: String,
    buffer: bool,
    encode: Option<Arc<EncodeFn>>,
    decode: Option<Arc<DecodeFn>>,
}

impl CustomEncoding {
    /// Identity-behaving encoding named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buffer: false,
            encode: None,
            decode: None,
        }
    }

    /// Declare whether the transport form is a byte sequence
    pub fn buffer(mut self, buffer: bool) -> Self {
        self.buffer = buffer;
        self
    }

    /// Set the encode function
    pub fn with_encode<F>(mut self, encode: F) -> Self
    where
        F: Fn(&Value) -> Result<Transport, CodecError> + Send + Sync + 'static,
    {
        self.encode = Some(Arc::new(encode));
        self
    }

    /// Set the decode function
    pub fn with_decode<F>(mut self, decode: F) -> Self
    where
        F: Fn(Transport) -> Result<Value, CodecError> + Send + Sync + 'static,
    {
        self.decode = Some(Arc::new(decode));
        self
    }

    /// Wrap into a shareable encoding handle
    pub fn into_shared(self) -> Arc<dyn Encoding> {
        Arc::new(self)
    }
}

impl Encoding for CustomEncoding {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        match &self.encode {
            Some(encode) => encode(value),
            None => Identity.encode(value),
        }
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        match &self.decode {
            Some(decode) => decode(data),
            None => Identity.decode(data),
        }
    }

    fn is_buffer(&self) -> bool {
        self.buffer
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CustomEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomEncoding")
            .field("name", &self.name)
            .field("buffer", &self.buffer)
            .field("encode", &self.encode.is_some())
            .field("decode", &self.decode.is_some())
            .finish()
    }
}
