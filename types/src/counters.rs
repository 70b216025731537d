//! The persisted yes/no tally shared by every session.

use serde::{Deserialize, Serialize};

use crate::session::Choice;

/// Global yes/no tallies.
///
/// Reads accept both the long (`yes_total`/`no_total`) and the short
/// (`yes`/`no`) field names; a missing field counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalCounters {
    #[serde(default, alias = "yes")]
    pub yes_total: u64,
    #[serde(default, alias = "no")]
    pub no_total: u64,
}

impl GlobalCounters {
    #[must_use]
    pub const fn new(yes_total: u64, no_total: u64) -> Self {
        Self {
            yes_total,
            no_total,
        }
    }

    /// Return a copy with the field matching `choice` bumped by one.
    #[must_use]
    pub fn incremented(self, choice: Choice) -> Self {
        match choice {
            Choice::Yes => Self {
                yes_total: self.yes_total.saturating_add(1),
                ..self
            },
            Choice::No => Self {
                no_total: self.no_total.saturating_add(1),
                ..self
            },
        }
    }
}

/// On-disk field naming used when writing the counter record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterSchema {
    /// `{"yes_total": N, "no_total": N}`
    #[default]
    Totals,
    /// `{"yes": N, "no": N}`
    Short,
}
