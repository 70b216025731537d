//! Counter file sharing between independent store handles.

use std::fs;
use std::sync::Arc;
use std::thread;

use cupid_engine::{Choice, CounterStore, GlobalCounters, MemoryCounterStore, Rules};
use cupid_types::CounterSchema;

use crate::common::{json_store, reach_proposal, reject, shared_app};

#[test]
fn parallel_sessions_sum_exactly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("analytics.json");
    let rules = Rules {
        heart_clicks: 1,
        ..Rules::default()
    };

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let path = path.clone();
            thread::spawn(move || {
                let store = Arc::new(json_store(&path));
                let mut app = shared_app(rules, &store);
                reach_proposal(&mut app);
                reject(&mut app, 3);
                app.choose_yes();
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("session thread");
    }

    assert_eq!(json_store(&path).read(), GlobalCounters::new(6, 18));
}

#[test]
fn readers_see_whole_records_during_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("analytics.json");
    let writer_store = json_store(&path);

    let writer = thread::spawn(move || {
        for _ in 0..50 {
            writer_store.record(Choice::No).expect("record");
        }
    });

    let reader = json_store(&path);
    let mut last = 0;
    while !writer.is_finished() {
        let seen = reader.read();
        assert_eq!(seen.yes_total, 0);
        assert!(seen.no_total >= last, "tally went backwards");
        last = seen.no_total;
    }
    writer.join().expect("writer");
    assert_eq!(reader.read(), GlobalCounters::new(0, 50));
}

#[test]
fn short_file_written_elsewhere_is_read_and_extended() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("response_stats.json");
    fs::write(&path, r#"{"yes": 12, "no": 40}"#).expect("seed");

    let long = json_store(&path);
    assert_eq!(long.read(), GlobalCounters::new(12, 40));

    long.record(Choice::Yes).expect("record");
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(raw, serde_json::json!({"yes_total": 13, "no_total": 40}));

    let short = json_store(&path).with_schema(CounterSchema::Short);
    short.record(Choice::No).expect("record");
    assert_eq!(long.read(), GlobalCounters::new(13, 41));
}

#[test]
fn leftover_backup_is_restored_before_recording() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("analytics.json");
    fs::write(path.with_extension("bak"), r#"{"yes_total": 3, "no_total": 2}"#).expect("seed");

    let store = json_store(&path);
    assert_eq!(store.record(Choice::Yes).expect("record"), GlobalCounters::new(4, 2));
    assert!(!path.with_extension("bak").exists());
}

#[test]
fn memory_store_is_shared_across_sessions() {
    let store = Arc::new(MemoryCounterStore::default());
    let rules = Rules::default();

    let mut first = shared_app(rules, &store);
    reach_proposal(&mut first);
    reject(&mut first, 1);
    first.choose_yes();

    let mut second = shared_app(rules, &store);
    reach_proposal(&mut second);
    second.choose_yes();

    assert_eq!(first.summary(), Some(GlobalCounters::new(1, 1)));
    assert_eq!(second.summary(), Some(GlobalCounters::new(2, 1)));
    assert_eq!(store.read(), GlobalCounters::new(2, 1));
    assert!(store.location().is_none());
}
