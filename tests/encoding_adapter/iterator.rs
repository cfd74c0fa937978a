//! iterator: option translation, decoding, seek and end

use crate::common::*;
use encodedb::{CodecError, Entry, ErrorKind};

fn prefixing_keys() -> CodecOptions {
    let encoding = CustomEncoding::new("prefix")
        .with_encode(|key| Ok(Transport::from(format!("encoded_{}", key.to_text()))));
    CodecOptions::new().key_encoding(encoding)
}

#[test]
fn test_buffer_flags_default_to_false() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    db.iterator(&CallOptions::new()).unwrap();
    let opts = log.last_options();
    assert_eq!(opts.get_bool("keyAsBuffer"), Some(false));
    assert_eq!(opts.get_bool("valueAsBuffer"), Some(false));
}

#[test]
fn test_buffer_flags_follow_buffer_encodings() {
    let options = CodecOptions::new()
        .key_encoding(CustomEncoding::new("k").buffer(true))
        .value_encoding(CustomEncoding::new("v").buffer(true));
    let (db, log) = adapter(RecordingStore::new(), options);
    db.iterator(&CallOptions::new()).unwrap();
    let opts = log.last_options();
    assert_eq!(opts.get_bool("keyAsBuffer"), Some(true));
    assert_eq!(opts.get_bool("valueAsBuffer"), Some(true));
}

#[test]
fn test_buffer_flags_follow_string_encodings() {
    let options = CodecOptions::new()
        .key_encoding(CustomEncoding::new("k").buffer(false))
        .value_encoding(CustomEncoding::new("v").buffer(false));
    let (db, log) = adapter(RecordingStore::new(), options);
    db.iterator(&CallOptions::new().with("keyAsBuffer", true))
        .unwrap();
    let opts = log.last_options();
    assert_eq!(opts.get_bool("keyAsBuffer"), Some(false));
    assert_eq!(opts.get_bool("valueAsBuffer"), Some(false));
}

#[test]
fn test_keys_and_values_default_to_true() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    db.iterator(&CallOptions::new()).unwrap();
    let opts = log.last_options();
    assert_eq!(opts.get_bool("keys"), Some(true));
    assert_eq!(opts.get_bool("values"), Some(true));
}

#[test]
fn test_skips_keys_when_disabled() {
    let never = CustomEncoding::new("never")
        .with_decode(|_| panic!("key decoder must not be called"));
    let backend = RecordingStore::new().with_entries(vec![RawEntry::new("", "value")]);
    let (db, log) = adapter(backend, CodecOptions::new().key_encoding(never));

    let mut it = db.iterator(&CallOptions::new().with("keys", false)).unwrap();
    let entry = it.next().unwrap().unwrap();

    assert_eq!(log.last_options().get_bool("keys"), Some(false));
    assert_eq!(
        entry,
        Entry {
            key: None,
            value: Some(Value::from("value"))
        }
    );
}

#[test]
fn test_skips_values_when_disabled() {
    let never = CustomEncoding::new("never")
        .with_decode(|_| panic!("value decoder must not be called"));
    let backend = RecordingStore::new().with_entries(vec![RawEntry::new("key", "")]);
    let (db, log) = adapter(backend, CodecOptions::new().value_encoding(never));

    let mut it = db.iterator(&CallOptions::new().with("values", false)).unwrap();
    let entry = it.next().unwrap().unwrap();

    assert_eq!(log.last_options().get_bool("values"), Some(false));
    assert_eq!(entry.key, Some(Value::from("key")));
    assert_eq!(entry.value, None);
}

#[test]
fn test_encodes_range_options() {
    let (db, log) = adapter(RecordingStore::new(), prefixing_keys());
    let opts = CallOptions::new()
        .with("gt", 3)
        .with("gte", 4)
        .with("lt", 5)
        .with("lte", 6)
        .with("foo", 7);
    db.iterator(&opts).unwrap();
    let forwarded = log.last_options();
    assert_eq!(forwarded.get("gt"), Some(&Value::from("encoded_3")));
    assert_eq!(forwarded.get("gte"), Some(&Value::from("encoded_4")));
    assert_eq!(forwarded.get("lt"), Some(&Value::from("encoded_5")));
    assert_eq!(forwarded.get("lte"), Some(&Value::from("encoded_6")));
    assert_eq!(forwarded.get("foo"), Some(&Value::Int(7)));
}

#[test]
fn test_keeps_null_range_options() {
    let (db, log) = adapter(RecordingStore::new(), prefixing_keys());
    let opts = ["gt", "gte", "lt", "lte"]
        .into_iter()
        .fold(CallOptions::new(), |opts, name| opts.with(name, Value::Null));
    db.iterator(&opts).unwrap();
    let forwarded = log.last_options();
    for name in ["gt", "gte", "lt", "lte"] {
        assert_eq!(forwarded.get(name), Some(&Value::Null), "{}", name);
    }
}

#[test]
fn test_keeps_undefined_range_options() {
    let (db, log) = adapter(RecordingStore::new(), prefixing_keys());
    let opts = ["gt", "gte", "lt", "lte"]
        .into_iter()
        .fold(CallOptions::new(), |opts, name| opts.with(name, Value::Undefined));
    db.iterator(&opts).unwrap();
    let forwarded = log.last_options();
    for name in ["gt", "gte", "lt", "lte"] {
        assert!(forwarded.contains(name), "{} missing", name);
        assert_eq!(forwarded.get(name), Some(&Value::Undefined), "{}", name);
    }
}

#[test]
fn test_does_not_add_range_options() {
    let (db, log) = adapter(RecordingStore::new(), prefixing_keys());
    db.iterator(&CallOptions::new()).unwrap();
    let forwarded = log.last_options();
    for name in ["gt", "gte", "lt", "lte"] {
        assert!(!forwarded.contains(name), "{} was added", name);
    }
}

#[test]
fn test_forwards_next_error() {
    let (db, _) = adapter(
        RecordingStore::new().failing("from underlying iterator"),
        CodecOptions::default(),
    );
    let mut it = db.iterator(&CallOptions::new()).unwrap();
    let err = it.next().unwrap().unwrap_err();
    assert_eq!(err.to_string(), "from underlying iterator");
    assert_eq!(err.kind(), ErrorKind::Store);
}

#[test]
fn test_forwards_end() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    let it = db.iterator(&CallOptions::new()).unwrap();
    it.end().unwrap();
    assert_eq!(log.calls().last(), Some(&Call::End));
}

#[test]
fn test_end_error_forwarded() {
    let (db, _) = adapter(RecordingStore::new().failing("end failed"), CodecOptions::default());
    let it = db.iterator(&CallOptions::new()).unwrap();
    assert_eq!(it.end().unwrap_err().to_string(), "end failed");
}

#[test]
fn test_key_decode_error() {
    let failing = CustomEncoding::new("failing").with_decode(|key| {
        assert_eq!(key, Transport::from("key"));
        Err(CodecError::decode("from codec"))
    });
    let backend = RecordingStore::new().with_entries(vec![RawEntry::new("key", "value")]);
    let (db, _) = adapter(backend, CodecOptions::new().key_encoding(failing));

    let result = db.iterator(&CallOptions::new()).unwrap().next().unwrap();
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "from codec");
    assert_eq!(err.name(), "EncodingError");
}

#[test]
fn test_value_decode_error() {
    let failing = CustomEncoding::new("failing").with_decode(|value| {
        assert_eq!(value, Transport::from("value"));
        Err(CodecError::decode("from codec"))
    });
    let backend = RecordingStore::new().with_entries(vec![RawEntry::new("key", "value")]);
    let (db, _) = adapter(backend, CodecOptions::new().value_encoding(failing));

    let result = db.iterator(&CallOptions::new()).unwrap().next().unwrap();
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "from codec");
    assert_eq!(err.name(), "EncodingError");
}

#[test]
fn test_exhausted_iterator_yields_none() {
    let backend = RecordingStore::new().with_entries(vec![RawEntry::new("a", "1")]);
    let (db, _) = adapter(backend, CodecOptions::default());
    let entries: Vec<_> = db
        .iterator(&CallOptions::new())
        .unwrap()
        .collect::<encodedb::Result<_>>()
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_encodes_seek_target() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::new().key_encoding("json"));
    let mut it = db.iterator(&CallOptions::new()).unwrap();
    it.seek(123, &CallOptions::new()).unwrap();
    assert_eq!(log.calls().last(), Some(&Call::Seek(text("123"), OptionMap::new())));
}

#[test]
fn test_encodes_seek_target_with_iterator_encoding() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::default());
    db.iterator(&CallOptions::new())
        .unwrap()
        .seek("a", &CallOptions::new())
        .unwrap();
    db.iterator(&CallOptions::new().key_encoding("json"))
        .unwrap()
        .seek("a", &CallOptions::new())
        .unwrap();

    let targets: Vec<_> = log
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Seek(target, _) => Some(target),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec![text("a"), text("\"a\"")]);
}

#[test]
fn test_encodes_nullish_seek_target() {
    let stringify = CustomEncoding::new("string")
        .with_encode(|value| Ok(Transport::from(value.to_text())));
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::new().key_encoding(stringify));
    let mut it = db.iterator(&CallOptions::new()).unwrap();
    it.seek(Value::Null, &CallOptions::new()).unwrap();
    it.seek(Value::Undefined, &CallOptions::new()).unwrap();

    let targets: Vec<_> = log
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Seek(target, _) => Some(target),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec![text("null"), text("undefined")]);
}

#[test]
fn test_iterator_encode_failure_opens_nothing() {
    let (db, log) = adapter(RecordingStore::new(), CodecOptions::new().key_encoding("hex"));
    let err = db
        .iterator(&CallOptions::new().with("gt", "not hex"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encode);
    assert!(log.calls().is_empty());
}
