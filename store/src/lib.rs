//! Global counter persistence for Cupid.
//!
//! A [`CounterStore`] holds the two shared tallies every session contributes to.
//! Reading never fails: a missing or unreadable record is the same as
//! "no votes yet". Recording is a locked read-modify-write, so concurrent
//! sessions sharing one file do not lose increments.

mod json;
mod memory;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use cupid_types::{Choice, GlobalCounters};

pub use json::{DEFAULT_STORE_FILE, JsonCounterStore};
pub use memory::MemoryCounterStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode counters: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait CounterStore: Send + Sync {
    /// Current tallies. Absent or malformed storage reads as zero.
    fn read(&self) -> GlobalCounters;

    /// Add one vote for `choice` and return the tallies after the write.
    fn record(&self, choice: Choice) -> Result<GlobalCounters, StoreError>;

    /// Backing file, if any.
    fn location(&self) -> Option<&Path> {
        None
    }
}

impl<S: CounterStore + ?Sized> CounterStore for Arc<S> {
    fn read(&self) -> GlobalCounters {
        (**self).read()
    }

    fn record(&self, choice: Choice) -> Result<GlobalCounters, StoreError> {
        (**self).record(choice)
    }

    fn location(&self) -> Option<&Path> {
        (**self).location()
    }
}
