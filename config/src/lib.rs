//! Configuration for Cupid.
//!
//! Read from `~/.cupid/config.toml`. Every section is optional:
//!
//! ```toml
//! [app]
//! tui = "full"            # or "inline"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [rules]
//! heart_clicks = 10
//! escalation_at = 10
//! withdraw_no_at = 14
//! yes_growth = 0.7
//!
//! [store]
//! path = "analytics.json"  # ${VAR} references are expanded
//! schema = "totals"        # or "short" for {"yes": N, "no": N}
//!
//! [copy]
//! progress = ["You can do it!", "..."]
//! ```
//!
//! `CUPID_STORE` overrides `[store] path`; `CUPID_TUI` is read by the binary.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use cupid_store::{DEFAULT_STORE_FILE, JsonCounterStore};
use cupid_types::ui::UiOptions;
use cupid_types::{CounterSchema, EmptyProgressError, ProgressMessages, Rules, RulesError};

pub const STORE_ENV_VAR: &str = "CUPID_STORE";

#[derive(Debug, Default, Deserialize)]
pub struct CupidConfig {
    pub app: Option<AppConfig>,
    pub rules: Option<Rules>,
    pub store: Option<StoreConfig>,
    pub copy: Option<CopyConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid [rules]: {0}")]
    Rules(#[from] RulesError),
    #[error("invalid [copy]: {0}")]
    Copy(#[from] EmptyProgressError),
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "full" (alternate screen) or "inline".
    pub tui: Option<String>,
    /// Use ASCII-only glyphs instead of emoji.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the heartbeat and card animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    #[serde(default)]
    pub schema: CounterSchema,
}

#[derive(Debug, Default, Deserialize)]
pub struct CopyConfig {
    pub progress: Option<Vec<String>>,
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Pick the counter file: env override, then config, then the default name.
#[must_use]
pub fn resolve_store_path(env_value: Option<&str>, configured: Option<&str>) -> PathBuf {
    env_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| configured.map(str::trim).filter(|v| !v.is_empty()))
        .map(|raw| PathBuf::from(expand_env_vars(raw)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

impl CupidConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    pub fn rules(&self) -> Result<Rules, ConfigError> {
        let rules = self.rules.unwrap_or_default();
        rules.validate()?;
        Ok(rules)
    }

    pub fn progress_messages(&self) -> Result<ProgressMessages, ConfigError> {
        match self.copy.as_ref().and_then(|c| c.progress.clone()) {
            Some(lines) => Ok(ProgressMessages::new(lines)?),
            None => Ok(ProgressMessages::default()),
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tui_mode(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.tui.as_deref())
    }

    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        let env_value = env::var(STORE_ENV_VAR).ok();
        let configured = self.store.as_ref().and_then(|s| s.path.as_deref());
        resolve_store_path(env_value.as_deref(), configured)
    }

    #[must_use]
    pub fn store_schema(&self) -> CounterSchema {
        self.store.as_ref().map(|s| s.schema).unwrap_or_default()
    }

    /// File-backed counter store as configured.
    #[must_use]
    pub fn counter_store(&self) -> JsonCounterStore {
        JsonCounterStore::new(self.store_path()).with_schema(self.store_schema())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cupid").join("config.toml"))
}
