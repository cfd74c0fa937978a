//! get / get_many

use crate::common::*;
use encodedb::{CodecError, Error, ErrorKind};
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_default_encoding_reads_strings() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    db.get("key", &CallOptions::new()).unwrap();
    assert_eq!(log.last_options().get_bool("asBuffer"), Some(false));
}

#[test]
fn test_custom_string_encoding_reads_strings() {
    let options = CodecOptions::new().value_encoding(CustomEncoding::new("text").buffer(false));
    let (db, log) = adapter(RecordingStore::new(), options);
    db.get("key", &CallOptions::new()).unwrap();
    assert_eq!(log.last_options().get_bool("asBuffer"), Some(false));
}

#[test]
fn test_custom_buffer_encoding_reads_buffers() {
    let options = CodecOptions::new().value_encoding(CustomEncoding::new("bytes").buffer(true));
    let (db, log) = adapter(RecordingStore::new(), options);
    db.get("key", &CallOptions::new()).unwrap();
    assert_eq!(log.last_options().get_bool("asBuffer"), Some(true));
}

#[test]
fn test_explicit_as_buffer_wins() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    db.get("key", &CallOptions::new().with("asBuffer", true)).unwrap();
    assert_eq!(log.last_options().get_bool("asBuffer"), Some(true));
}

#[test]
fn test_get_encodes_key_and_decodes_value() {
    let backend = RecordingStore::new().returning("{\"a\":[1,2]}");
    let (db, log) = adapter(backend, json());
    let value = db.get(7, &CallOptions::new()).unwrap();
    assert_eq!(
        value,
        Some(obj([("a", Value::Array(vec![Value::Int(1), Value::Int(2)]))]))
    );
    assert_eq!(
        log.single(),
        Call::Get(text("7"), OptionMap::new().with("asBuffer", false))
    );
}

#[test]
fn test_get_not_found_is_none() {
    let (db, _) = adapter(RecordingStore::new(), json());
    assert_eq!(db.get("missing", &CallOptions::new()).unwrap(), None);
}

#[test]
fn test_get_error_forwarded() {
    let (db, _) = adapter(RecordingStore::new().failing("error from store"), CodecOptions::default());
    let err = db.get("key", &CallOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "error from store");
    assert_eq!(err.kind(), ErrorKind::Store);
}

#[test]
fn test_safe_decode_in_get() {
    let backend = MemoryStore::new();
    let writer = EncodingStore::new(Arc::new(backend.clone())).unwrap();
    writer
        .put("foo", "this {} is [] not : json", &CallOptions::new())
        .unwrap();

    let reader =
        EncodingStore::with_options(Arc::new(backend), CodecOptions::new().value_encoding("json"))
            .unwrap();
    let err = reader.get("foo", &CallOptions::new()).unwrap_err();
    assert_eq!(err.name(), "EncodingError");
    assert!(err.is_decode_failure());
}

#[test]
fn test_get_with_value_encoding_override() {
    let (db, _) = memory_adapter(CodecOptions::default());
    db.put("foo", "{\"thisis\":\"json\"}", &CallOptions::new()).unwrap();
    let value = db
        .get("foo", &CallOptions::new().value_encoding("json"))
        .unwrap();
    assert_eq!(value, Some(obj([("thisis", Value::from("json"))])));
}

#[test]
fn test_get_many_skips_decoding_not_found() {
    let decoded = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&decoded);
    let encoding = CustomEncoding::new("test")
        .with_encode(|v| encodedb::get_encoding("json")?.encode(v))
        .with_decode(move |data| {
            seen.lock().push(data.clone());
            encodedb::get_encoding("json")?.decode(data)
        });
    let (db, _) = memory_adapter(CodecOptions::new().value_encoding(encoding));
    let data = obj([("beep", Value::from("boop"))]);

    db.open(&OptionMap::new()).unwrap();
    db.put("foo", data.clone(), &CallOptions::new()).unwrap();
    let values = db.get_many(["foo", "bar"], &CallOptions::new()).unwrap();

    assert_eq!(values, vec![Some(data), None]);
    assert_eq!(*decoded.lock(), vec![text("{\"beep\":\"boop\"}")]);
    db.close().unwrap();
}

#[test]
fn test_get_many_forwards_decode_error() {
    let encoding =
        CustomEncoding::new("test").with_decode(|_| Err(CodecError::decode("decode error")));
    let (db, _) = memory_adapter(CodecOptions::new().value_encoding(encoding));
    db.put("foo", "bar", &CallOptions::new()).unwrap();

    let err = db.get_many(["foo"], &CallOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "decode error");
    assert!(err.is_decode_failure());
}

#[test]
fn test_get_many_encodes_keys_and_sets_as_buffer() {
    let backend = RecordingStore::new().returning_many(vec![Some(bytes(b"ab")), None]);
    let (db, log) = adapter(backend, CodecOptions::new().key_encoding("json").value_encoding("hex"));
    let values = db.get_many([1, 2], &CallOptions::new()).unwrap();
    assert_eq!(values, vec![Some(Value::from("6162")), None]);
    assert_eq!(
        log.single(),
        Call::GetMany(
            vec![text("1"), text("2")],
            OptionMap::new().with("asBuffer", true)
        )
    );
}

#[test]
fn test_get_many_error_forwarded() {
    let (db, _) = adapter(RecordingStore::new().failing("boom"), CodecOptions::default());
    let err = db.get_many(["a"], &CallOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_get_rejects_nullish_key() {
    let (db, log) = adapter(RecordingStore::new().returning("v"), CodecOptions::default());
    for key in [Value::Null, Value::Undefined] {
        let err = db.get(key, &CallOptions::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidKey));
        assert_eq!(err.kind(), ErrorKind::Encode);
    }
    assert!(log.calls().is_empty());
}

#[test]
fn test_get_many_rejects_any_nullish_key() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    let err = db
        .get_many(
            [Value::from("a"), Value::Null, Value::from("b")],
            &CallOptions::new(),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "key cannot be `null` or `undefined`");
    assert!(log.calls().is_empty());
}
