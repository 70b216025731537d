//! In-process counter store.

use std::sync::{Mutex, PoisonError};

use cupid_types::{Choice, GlobalCounters};

use crate::{CounterStore, StoreError};

/// Counters that live only as long as the process. Useful for tests and for
/// running without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: Mutex<GlobalCounters>,
}

impl MemoryCounterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_counters(counters: GlobalCounters) -> Self {
        Self {
            counters: Mutex::new(counters),
        }
    }
}

impl CounterStore for MemoryCounterStore {
    fn read(&self) -> GlobalCounters {
        *self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, choice: Choice) -> Result<GlobalCounters, StoreError> {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        *counters = counters.incremented(choice);
        Ok(*counters)
    }
}
