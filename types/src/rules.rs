//! Thresholds that drive the interaction state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HEART_CLICKS: u32 = 10;
pub const DEFAULT_ESCALATION_AT: u32 = 10;
pub const DEFAULT_WITHDRAW_NO_AT: u32 = 14;
pub const DEFAULT_YES_GROWTH: f32 = 0.7;

/// Escalation thresholds and growth factors.
///
/// All fields are configuration, not hidden requirements: the defaults are one
/// consistent parameter set and `[rules]` in the config file may override any
/// of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Heart taps needed before the proposal is shown.
    pub heart_clicks: u32,
    /// Rejection count at which the one-time escalation notice fires.
    pub escalation_at: u32,
    /// Rejection count at which the "no" button is withdrawn for good.
    pub withdraw_no_at: u32,
    /// Added to the "yes" button scale on every rejection.
    pub yes_growth: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            heart_clicks: DEFAULT_HEART_CLICKS,
            escalation_at: DEFAULT_ESCALATION_AT,
            withdraw_no_at: DEFAULT_WITHDRAW_NO_AT,
            yes_growth: DEFAULT_YES_GROWTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    #[error("heart_clicks must be at least 1")]
    ZeroHeartClicks,
    #[error("withdraw_no_at must be at least 1")]
    ZeroWithdrawal,
    #[error("yes_growth must be a finite, non-negative number (got {0})")]
    InvalidGrowth(f32),
}

impl Rules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.heart_clicks == 0 {
            return Err(RulesError::ZeroHeartClicks);
        }
        if self.withdraw_no_at == 0 {
            return Err(RulesError::ZeroWithdrawal);
        }
        if !self.yes_growth.is_finite() || self.yes_growth < 0.0 {
            return Err(RulesError::InvalidGrowth(self.yes_growth));
        }
        Ok(())
    }

    /// True when the escalation notice can ever fire under these rules.
    #[must_use]
    pub fn escalation_reachable(&self) -> bool {
        self.escalation_at >= 1 && self.escalation_at <= self.withdraw_no_at
    }
}
