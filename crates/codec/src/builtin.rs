//! Named encoding presets.
//!
//! | name     | transport | value side                         |
//! |----------|-----------|------------------------------------|
//! | `utf8`   | text      | `String`                           |
//! | `json`   | text      | any JSON-representable value       |
//! | `binary` | bytes     | `Bytes`                            |
//! | `hex`    | bytes     | lowercase hex `String`             |
//! | `base64` | bytes     | standard base64 `String`           |
//! | `id`     | text      | `String` or `Bytes`, passed through |

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use encodedb_core::{Transport, Value};

use super::traits::{CodecError, Encoding};

fn text_of(data: Transport) -> Result<String, CodecError> {
    match data {
        Transport::Text(s) => Ok(s),
        Transport::Bytes(b) => String::from_utf8(b).map_err(CodecError::decode),
    }
}

/// UTF-8 text encoding. The default for keys and values.
///
/// Non-string values are stored in their plain text form, so `1` is stored
/// as `"1"` and reads back as the string `"1"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Encoding for Utf8 {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        Ok(Transport::Text(value.to_text()))
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        text_of(data).map(Value::String)
    }

    fn is_buffer(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "utf8"
    }
}

/// JSON text encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Encoding for Json {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        if value.is_undefined() {
            return Err(CodecError::encode("undefined has no JSON representation"));
        }
        let json = serde_json::Value::from(value.clone());
        serde_json::to_string(&json)
            .map(Transport::Text)
            .map_err(CodecError::encode)
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        let text = text_of(data)?;
        serde_json::from_str::<serde_json::Value>(&text)
            .map(Value::from)
            .map_err(CodecError::decode)
    }

    fn is_buffer(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Raw byte encoding.
///
/// Bytes pass through unchanged; other values are stored as the UTF-8 bytes
/// of their text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl Encoding for Binary {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        Ok(match value {
            Value::Bytes(b) => Transport::Bytes(b.clone()),
            other => Transport::Bytes(other.to_text().into_bytes()),
        })
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        Ok(Value::Bytes(data.into_bytes()))
    }

    fn is_buffer(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "binary"
    }
}

/// Hex encoding: hex strings on the value side, bytes in the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl Encoding for Hex {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        match value {
            Value::Bytes(b) => Ok(Transport::Bytes(b.clone())),
            other => hex::decode(other.to_text())
                .map(Transport::Bytes)
                .map_err(CodecError::encode),
        }
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        Ok(Value::String(hex::encode(data.as_slice())))
    }

    fn is_buffer(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "hex"
    }
}

/// Base64 encoding: base64 strings on the value side, bytes in the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Encoding for Base64 {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        match value {
            Value::Bytes(b) => Ok(Transport::Bytes(b.clone())),
            other => STANDARD
                .decode(other.to_text())
                .map(Transport::Bytes)
                .map_err(CodecError::encode),
        }
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        Ok(Value::String(STANDARD.encode(data.as_slice())))
    }

    fn is_buffer(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "base64"
    }
}

/// Identity encoding - no transformation.
///
/// Strings and bytes pass through in their own shape; anything else is
/// stored as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Encoding for Identity {
    fn encode(&self, value: &Value) -> Result<Transport, CodecError> {
        Ok(match value {
            Value::String(s) => Transport::Text(s.clone()),
            Value::Bytes(b) => Transport::Bytes(b.clone()),
            other => Transport::Text(other.to_text()),
        })
    }

    fn decode(&self, data: Transport) -> Result<Value, CodecError> {
        Ok(Value::from(data))
    }

    fn is_buffer(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "id"
    }
}
