//! End-to-end behaviour over MemoryStore

use crate::common::*;
use std::sync::Arc;

fn keys_of(db: &EncodingStore, options: &CallOptions) -> Vec<Value> {
    db.iterator(options)
        .unwrap()
        .map(|entry| entry.unwrap().key.unwrap())
        .collect()
}

#[test]
fn test_string_to_json() {
    let backend = MemoryStore::new();
    let writer = EncodingStore::new(Arc::new(backend.clone())).unwrap();
    writer
        .put("foo", "{\"thisis\":\"json\"}", &CallOptions::new())
        .unwrap();

    let reader =
        EncodingStore::with_options(Arc::new(backend), CodecOptions::new().value_encoding("json"))
            .unwrap();
    assert_eq!(
        reader.get("foo", &CallOptions::new()).unwrap(),
        Some(obj([("thisis", Value::from("json"))]))
    );
}

#[test]
fn test_json_to_string() {
    let backend = MemoryStore::new();
    let writer =
        EncodingStore::with_options(Arc::new(backend.clone()), CodecOptions::new().value_encoding("json"))
            .unwrap();
    writer
        .put("foo", obj([("thisis", Value::from("json"))]), &CallOptions::new())
        .unwrap();

    let reader = EncodingStore::new(Arc::new(backend)).unwrap();
    assert_eq!(
        reader.get("foo", &CallOptions::new()).unwrap(),
        Some(Value::from("{\"thisis\":\"json\"}"))
    );
}

#[test]
fn test_iterates_decoded_entries_in_key_order() {
    let (db, _) = memory_adapter(CodecOptions::new().value_encoding("json"));
    for (k, v) in [("b", 2), ("a", 1), ("c", 3)] {
        db.put(k, Value::Int(v), &CallOptions::new()).unwrap();
    }
    let entries: Vec<_> = db
        .iterator(&CallOptions::new())
        .unwrap()
        .map(|e| e.unwrap())
        .map(|e| (e.key.unwrap(), e.value.unwrap()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (Value::from("a"), Value::Int(1)),
            (Value::from("b"), Value::Int(2)),
            (Value::from("c"), Value::Int(3)),
        ]
    );
}

#[test]
fn test_range_reverse_and_limit() {
    let (db, _) = memory_adapter(CodecOptions::default());
    for k in ["a", "b", "c", "d", "e"] {
        db.put(k, "v", &CallOptions::new()).unwrap();
    }
    let opts = CallOptions::new()
        .with("gte", "b")
        .with("lt", "e")
        .with("reverse", true)
        .with("limit", 2);
    assert_eq!(keys_of(&db, &opts), vec![Value::from("d"), Value::from("c")]);
}

#[test]
fn test_nullish_bounds_are_open_ranges() {
    let (db, _) = memory_adapter(CodecOptions::default());
    for k in ["a", "b"] {
        db.put(k, "v", &CallOptions::new()).unwrap();
    }
    let opts = CallOptions::new()
        .with("gt", Value::Null)
        .with("lt", Value::Undefined);
    assert_eq!(keys_of(&db, &opts).len(), 2);
}

#[test]
fn test_binary_keys_iterate_as_bytes() {
    let (db, _) = memory_adapter(CodecOptions::new().key_encoding("binary"));
    db.put(vec![2u8], "two", &CallOptions::new()).unwrap();
    db.put(vec![1u8], "one", &CallOptions::new()).unwrap();
    assert_eq!(
        keys_of(&db, &CallOptions::new()),
        vec![Value::Bytes(vec![1]), Value::Bytes(vec![2])]
    );
}

#[test]
fn test_seek_within_range() {
    let (db, _) = memory_adapter(CodecOptions::new().key_encoding("json"));
    for k in 1..=5 {
        db.put(Value::Int(k), "v", &CallOptions::new()).unwrap();
    }
    let mut it = db.iterator(&CallOptions::new()).unwrap();
    it.seek(Value::Int(3), &CallOptions::new()).unwrap();
    let next = it.next().unwrap().unwrap();
    assert_eq!(next.key, Some(Value::Int(3)));
    it.end().unwrap();
}

#[test]
fn test_keys_only_iteration() {
    let (db, _) = memory_adapter(CodecOptions::new().value_encoding("json"));
    db.put("a", Value::Int(1), &CallOptions::new()).unwrap();
    let entry = db
        .iterator(&CallOptions::new().with("values", false))
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(entry.key, Some(Value::from("a")));
    assert_eq!(entry.value, None);
}

#[test]
fn test_clear_with_encoded_bounds() {
    let (db, backend) = memory_adapter(CodecOptions::new().key_encoding("json"));
    for k in 1..=4 {
        db.put(Value::Int(k), "v", &CallOptions::new()).unwrap();
    }
    db.clear(&CallOptions::new().with("gt", 1).with("lte", 3))
        .unwrap();
    assert_eq!(backend.len(), 2);
    assert_eq!(
        keys_of(&db, &CallOptions::new()),
        vec![Value::Int(1), Value::Int(4)]
    );
}

#[test]
fn test_clear_reverse_limit() {
    let (db, _) = memory_adapter(CodecOptions::default());
    for k in ["a", "b", "c"] {
        db.put(k, "v", &CallOptions::new()).unwrap();
    }
    db.clear(&CallOptions::new().with("reverse", true).with("limit", 1))
        .unwrap();
    assert_eq!(
        keys_of(&db, &CallOptions::new()),
        vec![Value::from("a"), Value::from("b")]
    );
}

#[test]
fn test_hex_and_base64_values() {
    let (db, backend) = memory_adapter(CodecOptions::new().value_encoding("hex"));
    db.put("k", "cafe", &CallOptions::new()).unwrap();
    assert_eq!(backend.raw_get(b"k"), Some(vec![0xca, 0xfe]));
    assert_eq!(
        db.get("k", &CallOptions::new().value_encoding("base64"))
            .unwrap(),
        Some(Value::from("yv4="))
    );
}

#[test]
fn test_snapshot_iterator_ignores_later_writes() {
    let (db, _) = memory_adapter(CodecOptions::default());
    db.put("a", "1", &CallOptions::new()).unwrap();
    let it = db.iterator(&CallOptions::new()).unwrap();
    db.put("b", "2", &CallOptions::new()).unwrap();
    assert_eq!(it.count(), 1);
}
