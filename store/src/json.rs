//! JSON file counter store.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use cupid_types::{Choice, CounterSchema, GlobalCounters};
use cupid_utils::{Durability, lock_exclusive, lock_path_for, replace_file, restore_backup};

use crate::{CounterStore, StoreError};

pub const DEFAULT_STORE_FILE: &str = "analytics.json";

#[derive(Serialize)]
struct ShortRecord {
    yes: u64,
    no: u64,
}

fn encode(schema: CounterSchema, counters: GlobalCounters) -> Result<Vec<u8>, serde_json::Error> {
    match schema {
        CounterSchema::Totals => serde_json::to_vec(&counters),
        CounterSchema::Short => serde_json::to_vec(&ShortRecord {
            yes: counters.yes_total,
            no: counters.no_total,
        }),
    }
}

/// Counters kept as a single JSON object on disk.
///
/// `record` serializes writers through an exclusive lock on
/// `<file>.lock` and replaces the file atomically. `read` takes no lock; it
/// observes either the previous or the next complete record.
#[derive(Debug, Clone)]
pub struct JsonCounterStore {
    path: PathBuf,
    lock_path: PathBuf,
    schema: CounterSchema,
    durability: Durability,
}

impl JsonCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = lock_path_for(&path);
        Self {
            path,
            lock_path,
            schema: CounterSchema::default(),
            durability: Durability::Synced,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: CounterSchema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_durability(mut self, durability: Durability) -> Self {
        self.durability = durability;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn schema(&self) -> CounterSchema {
        self.schema
    }

    /// Counters on disk. Missing or malformed content reads as zero; any
    /// other IO failure is returned so a writer never replaces a tally it
    /// could not see.
    fn load_strict(&self) -> Result<GlobalCounters, io::Error> {
        restore_backup(&self.path);

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No counter file yet; starting at zero");
                return Ok(GlobalCounters::default());
            }
            // Not UTF-8: malformed content, not an unreadable file.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), "Malformed counter file, using zero: {e}");
                return Ok(GlobalCounters::default());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str(&raw) {
            Ok(counters) => Ok(counters),
            Err(e) => {
                warn!(path = %self.path.display(), "Malformed counter file, using zero: {e}");
                Ok(GlobalCounters::default())
            }
        }
    }

    fn load(&self) -> GlobalCounters {
        self.load_strict().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "Failed to read counters, using zero: {e}");
            GlobalCounters::default()
        })
    }
}

impl CounterStore for JsonCounterStore {
    fn read(&self) -> GlobalCounters {
        self.load()
    }

    fn record(&self, choice: Choice) -> Result<GlobalCounters, StoreError> {
        let _guard = lock_exclusive(&self.lock_path).map_err(|source| StoreError::Lock {
            path: self.lock_path.clone(),
            source,
        })?;

        let current = self.load_strict().map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let next = current.incremented(choice);
        let bytes = encode(self.schema, next)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        replace_file(&self.path, &bytes, self.durability).map_err(|source| {
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            choice = choice.as_str(),
            yes_total = next.yes_total,
            no_total = next.no_total,
            "Recorded response"
        );
        Ok(next)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
