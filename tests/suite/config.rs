//! Config file to running session.

use std::fs;
use std::path::Path;

use cupid_config::ConfigError;
use cupid_engine::{App, AppSettings, CounterStore, CupidConfig, GlobalCounters, Stage};
use cupid_types::RulesError;

use crate::common::reach_proposal;

fn write_config(dir: &Path, body: &str) -> CupidConfig {
    let path = dir.join("config.toml");
    fs::write(&path, body).expect("write config");
    CupidConfig::load_from(path).expect("load config")
}

#[test]
fn configured_rules_and_copy_drive_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_path = dir.path().join("votes").join("stats.json");
    let config = write_config(
        dir.path(),
        &format!(
            r#"
[app]
ascii_only = true
reduced_motion = true

[rules]
heart_clicks = 2
withdraw_no_at = 1

[store]
path = "{}"
schema = "short"

[copy]
progress = ["first", "second"]
"#,
            store_path.display()
        ),
    );

    let mut app = App::from_config(&config).expect("app");
    assert_eq!(app.store_location(), Some(store_path.as_path()));

    app.heart();
    assert_eq!(app.progress_message(), Some("first"));
    app.heart();
    assert_eq!(app.session().stage(), Stage::Proposal);

    assert!(app.choose_no());
    assert!(app.no_withdrawn());
    assert!(!app.choose_no());
    app.choose_yes();

    assert_eq!(app.summary(), Some(GlobalCounters::new(1, 1)));
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store_path).expect("read")).expect("json");
    assert_eq!(raw, serde_json::json!({"yes": 1, "no": 1}));
}

#[test]
fn partial_rules_keep_defaults_for_the_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), "[rules]\nyes_growth = 1.5\n");

    let settings = AppSettings::from_config(&config).expect("settings");
    assert_eq!(settings.rules.heart_clicks, 10);
    assert_eq!(settings.rules.escalation_at, 10);
    assert_eq!(settings.rules.withdraw_no_at, 14);
    assert!((settings.rules.yes_growth - 1.5).abs() < f32::EPSILON);
}

#[test]
fn zero_heart_clicks_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), "[rules]\nheart_clicks = 0\n");

    let err = App::from_config(&config).err().expect("invalid rules");
    assert!(matches!(
        err,
        ConfigError::Rules(RulesError::ZeroHeartClicks)
    ));
}

#[test]
fn blank_progress_copy_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), "[copy]\nprogress = [\"\", \"   \"]\n");

    assert!(matches!(
        AppSettings::from_config(&config),
        Err(ConfigError::Copy(_))
    ));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[rules\nheart_clicks = ").expect("write");

    match CupidConfig::load_from(path.clone()) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn store_from_config_starts_empty_and_reaches_proposal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_path = dir.path().join("analytics.json");
    let config = write_config(
        dir.path(),
        &format!("[store]\npath = \"{}\"\n", store_path.display()),
    );

    let store = config.counter_store();
    assert_eq!(store.read(), GlobalCounters::default());

    let mut app = App::from_config(&config).expect("app");
    reach_proposal(&mut app);
    assert_eq!(app.session().click_count(), 10);
}
