//! Whole-session flows against a real counter file.

use std::fs;
use std::sync::Arc;

use cupid_engine::{Affordance, Choice, CounterStore, GlobalCounters, Rules, Stage, ToastKind, wording};

use crate::common::{app_with_store, json_store, reach_proposal, reject, shared_app};

#[test]
fn ten_taps_then_yes_persists_and_summarizes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("analytics.json");
    let mut app = app_with_store(Rules::default(), json_store(&path));

    for clicks in 1..10u32 {
        assert!(app.heart());
        assert_eq!(app.session().stage(), Stage::Counting);
        assert_eq!(app.session().click_count(), clicks);
        assert!(app.progress_message().is_some());
    }
    assert!(app.heart());
    assert_eq!(app.session().stage(), Stage::Proposal);
    assert!(!app.heart());
    assert_eq!(app.session().click_count(), 10);

    assert!(app.choose_yes());
    assert_eq!(app.session().final_choice(), Some(Choice::Yes));
    assert_eq!(app.summary(), Some(GlobalCounters::new(1, 0)));

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(raw, serde_json::json!({"yes_total": 1, "no_total": 0}));
}

#[test]
fn persistent_no_escalates_once_then_withdraws() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(json_store(&dir.path().join("stats.json")));
    let mut app = shared_app(Rules::default(), &store);
    reach_proposal(&mut app);

    reject(&mut app, 9);
    assert!(app.toast().is_none());

    reject(&mut app, 1);
    let toast = app.toast().expect("escalation");
    assert_eq!(toast.kind(), ToastKind::Escalation);
    assert_eq!(toast.text(), wording::ESCALATION_NOTICE);

    reject(&mut app, 4);
    assert!(!app.offers(Affordance::No));
    assert!(!app.choose_no());
    assert_eq!(app.session().no_rejections(), 14);
    assert!((app.cosmetics().yes_scale - (1.0 + 0.7 * 14.0)).abs() < 1e-4);

    assert_eq!(store.read(), GlobalCounters::new(0, 14));

    assert!(app.choose_yes());
    assert_eq!(app.summary(), Some(GlobalCounters::new(1, 14)));
}

#[test]
fn sessions_accumulate_in_one_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("analytics.json");
    let rules = Rules {
        heart_clicks: 1,
        ..Rules::default()
    };

    for _ in 0..3 {
        let mut app = app_with_store(rules, json_store(&path));
        reach_proposal(&mut app);
        reject(&mut app, 2);
        app.choose_yes();
    }

    let mut last = app_with_store(rules, json_store(&path));
    reach_proposal(&mut last);
    last.choose_yes();
    assert_eq!(last.summary(), Some(GlobalCounters::new(4, 6)));
}

#[test]
fn corrupt_file_is_replaced_on_first_answer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("analytics.json");
    fs::write(&path, "{ definitely not json").expect("seed");

    let mut app = app_with_store(Rules::default(), json_store(&path));
    reach_proposal(&mut app);
    app.choose_no();
    app.choose_yes();

    assert_eq!(app.summary(), Some(GlobalCounters::new(1, 1)));
    assert!(app.toast().is_none(), "recovering from a bad file is silent");
}

#[test]
fn unwritable_store_warns_but_finishes() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A plain file standing in for the parent directory makes every write fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").expect("seed");
    let path = blocker.join("analytics.json");

    let mut app = app_with_store(Rules::default(), json_store(&path));
    reach_proposal(&mut app);
    assert!(app.choose_yes());

    assert_eq!(app.session().stage(), Stage::Answered);
    assert_eq!(app.toast().map(|t| t.kind()), Some(ToastKind::Warning));
    assert_eq!(app.summary(), Some(GlobalCounters::default()));
}
