//! Sharing one adapter across threads

use crate::common::*;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_adapter_is_send_sync() {
    assert_send_sync::<EncodingStore>();
    assert_send_sync::<CallOptions>();
}

#[test]
fn test_concurrent_put_get() {
    let (db, backend) = memory_adapter(json());
    let db = Arc::new(db);
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = obj([("t", Value::Int(t)), ("i", Value::Int(i))]);
                    db.put(key.clone(), Value::Int(t * 1000 + i), &CallOptions::new())
                        .unwrap();
                    assert_eq!(
                        db.get(key, &CallOptions::new()).unwrap(),
                        Some(Value::Int(t * 1000 + i))
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(backend.len(), 800);
}

#[test]
fn test_batches_decode_consistently_under_concurrent_reads() {
    let (db, _) = memory_adapter(json());
    let db = Arc::new(db);
    let writer = {
        let db = Arc::clone(&db);
        thread::spawn(move || {
            for round in 0..200i64 {
                let ops = vec![
                    BatchOp::put("a", Value::Int(round)),
                    BatchOp::put("b", Value::Int(round)),
                ];
                db.batch(ops, &CallOptions::new()).unwrap();
            }
        })
    };

    for _ in 0..200 {
        let values: Vec<_> = db
            .iterator(&CallOptions::new())
            .unwrap()
            .map(|entry| entry.unwrap().value)
            .collect();
        if values.len() == 2 {
            assert_eq!(values[0], values[1]);
        }
    }
    writer.join().unwrap();
}
