//! Codec configuration
//!
//! A [`CodecOptions`] names (or defines) the key and value encodings of an
//! adapter. It can be built in code, embedded in a host's own serde config,
//! or parsed from a TOML snippet:
//!
//! ```toml
//! # Key and value encodings: "utf8" (default), "json", "binary", "hex",
//! # "base64" or "id"
//! key_encoding = "utf8"
//! value_encoding = "json"
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

use super::custom::CustomEncoding;
use super::get_encoding;
use super::traits::{CodecError, Encoding};

/// Default encoding name for keys and values
pub const DEFAULT_ENCODING: &str = "utf8";

/// A named preset or a caller-defined encoding.
#[derive(Clone)]
pub enum EncodingSpec {
    /// Preset resolved through [`get_encoding`]
    Named(String),
    /// Caller-defined encoding used as-is
    Custom(Arc<dyn Encoding>),
}

impl EncodingSpec {
    /// Resolve into a concrete encoding.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownEncoding`] for an unrecognized name.
    pub fn resolve(&self) -> Result<Arc<dyn Encoding>, CodecError> {
        match self {
            EncodingSpec::Named(name) => get_encoding(name),
            EncodingSpec::Custom(encoding) => Ok(Arc::clone(encoding)),
        }
    }

    /// Name of the preset or of the custom encoding
    pub fn name(&self) -> &str {
        match self {
            EncodingSpec::Named(name) => name,
            EncodingSpec::Custom(encoding) => encoding.name(),
        }
    }
}

impl Default for EncodingSpec {
    fn default() -> Self {
        EncodingSpec::Named(DEFAULT_ENCODING.to_string())
    }
}

impl PartialEq for EncodingSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EncodingSpec::Named(a), EncodingSpec::Named(b)) => a == b,
            (EncodingSpec::Custom(a), EncodingSpec::Custom(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for EncodingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingSpec::Named(name) => f.debug_tuple("Named").field(name).finish(),
            EncodingSpec::Custom(encoding) => f.debug_tuple("Custom").field(encoding).finish(),
        }
    }
}

impl From<&str> for EncodingSpec {
    fn from(name: &str) -> Self {
        EncodingSpec::Named(name.to_string())
    }
}

impl From<String> for EncodingSpec {
    fn from(name: String) -> Self {
        EncodingSpec::Named(name)
    }
}

impl From<CustomEncoding> for EncodingSpec {
    fn from(encoding: CustomEncoding) -> Self {
        EncodingSpec::Custom(Arc::new(encoding))
    }
}

impl From<Arc<dyn Encoding>> for EncodingSpec {
    fn from(encoding: Arc<dyn Encoding>) -> Self {
        EncodingSpec::Custom(encoding)
    }
}

// Custom encodings serialize by name; only names can be deserialized.
impl Serialize for EncodingSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EncodingSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(EncodingSpec::Named)
    }
}

/// Key and value encodings of an adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Encoding for keys, range bounds and seek targets
    #[serde(default, alias = "keyEncoding")]
    pub key_encoding: EncodingSpec,
    /// Encoding for values
    #[serde(default, alias = "valueEncoding")]
    pub value_encoding: EncodingSpec,
}

impl CodecOptions {
    /// `utf8` keys and values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the key encoding
    pub fn key_encoding(mut self, spec: impl Into<EncodingSpec>) -> Self {
        self.key_encoding = spec.into();
        self
    }

    /// Replace the value encoding
    pub fn value_encoding(mut self, spec: impl Into<EncodingSpec>) -> Self {
        self.value_encoding = spec.into();
        self
    }

    /// Parse options from TOML text.
    ///
    /// Missing fields default to `utf8`. Names are not checked here; an
    /// unknown name fails when the options are resolved.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] if the text is not valid TOML for
    /// this structure.
    pub fn from_toml_str(content: &str) -> Result<Self, CodecError> {
        toml::from_str(content).map_err(|e| CodecError::InvalidConfig(e.to_string()))
    }

    /// Render options as TOML text.
    pub fn to_toml_string(&self) -> Result<String, CodecError> {
        toml::to_string(self).map_err(|e| CodecError::InvalidConfig(e.to_string()))
    }
}
