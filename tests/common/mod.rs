//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use cupid_engine::{App, AppSettings, CounterStore, Rules, Stage, UiOptions};
use cupid_store::JsonCounterStore;
use cupid_utils::Durability;

/// File store that skips fsync so tests stay fast.
pub fn json_store(path: &Path) -> JsonCounterStore {
    JsonCounterStore::new(path).with_durability(Durability::Unsynced)
}

/// Plain ASCII with no motion, so rendered screens are deterministic.
pub fn still_ascii() -> UiOptions {
    UiOptions {
        ascii_only: true,
        high_contrast: false,
        reduced_motion: true,
    }
}

pub fn app_with_store<S>(rules: Rules, store: S) -> App
where
    S: CounterStore + 'static,
{
    let settings = AppSettings {
        rules,
        ui_options: still_ascii(),
        ..AppSettings::default()
    };
    App::new(settings, Box::new(store))
}

pub fn shared_app<S>(rules: Rules, store: &Arc<S>) -> App
where
    S: CounterStore + 'static,
{
    app_with_store(rules, Arc::clone(store))
}

/// Tap the heart until the proposal appears.
pub fn reach_proposal(app: &mut App) {
    while app.session().stage() == Stage::Counting {
        assert!(app.heart(), "heart should be on offer while counting");
    }
}

/// Say no `times` times, asserting each one was accepted.
pub fn reject(app: &mut App, times: u32) {
    for _ in 0..times {
        assert!(app.choose_no(), "no should still be on offer");
    }
}
