//! Option translation
//!
//! Rewrites the backend-facing fields of a call's options: range bounds get
//! key-encoded, buffer flags are derived from the resolved encoders, and
//! iterator/clear defaults are filled in. Every other field is passed through
//! untouched.
//!
//! A range bound can be in one of three states and each one survives
//! translation as-is: absent stays absent, `Undefined` stays `Undefined`,
//! `Null` stays `Null`. Only bounds holding a real value are encoded.

use encodedb_codec::{CodecError, Encoders, Encoding};
use encodedb_core::{names, OptionMap, RangeBound, Value};

/// Copy of `options` with every non-nullish range bound key-encoded.
pub fn encode_range_bounds(
    options: &OptionMap,
    key_encoding: &dyn Encoding,
) -> Result<OptionMap, CodecError> {
    let mut translated = options.clone();
    for bound in RangeBound::ALL {
        if let Some(value) = options.bound(bound) {
            if !value.is_nullish() {
                translated.insert(bound.field_name(), key_encoding.encode(value)?);
            }
        }
    }
    Ok(translated)
}

/// Backend options for `get` / `get_many`.
///
/// `asBuffer` follows the value encoder unless the caller set it.
pub fn read_options(fields: &OptionMap, encoders: &Encoders) -> OptionMap {
    let mut translated = fields.clone();
    translated.insert_default(names::AS_BUFFER, encoders.value_as_buffer());
    translated
}

/// Backend options for `iterator`.
///
/// `keys` and `values` are true unless explicitly `false`; the buffer flags
/// always follow the encoders.
pub fn iterator_options(fields: &OptionMap, encoders: &Encoders) -> Result<OptionMap, CodecError> {
    let mut translated = encode_range_bounds(fields, encoders.key.as_ref())?;
    translated.insert(names::KEYS, fields.flag_unless_false(names::KEYS));
    translated.insert(names::VALUES, fields.flag_unless_false(names::VALUES));
    translated.insert(names::KEY_AS_BUFFER, encoders.key_as_buffer());
    translated.insert(names::VALUE_AS_BUFFER, encoders.value_as_buffer());
    Ok(translated)
}

/// Backend options for `clear`.
///
/// `reverse` is coerced to a boolean (default `false`) and `limit` defaults
/// to `-1` (no limit).
pub fn clear_options(fields: &OptionMap, key_encoding: &dyn Encoding) -> Result<OptionMap, CodecError> {
    let mut translated = encode_range_bounds(fields, key_encoding)?;
    let reverse = fields.get(names::REVERSE).is_some_and(truthy);
    translated.insert(names::REVERSE, reverse);
    translated.insert_default(names::LIMIT, -1i64);
    Ok(translated)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Float(f) => *f != 0.0 && !f.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Bytes(_) | Value::Array(_) | Value::Object(_) => true,
    }
}
