//! Presentation parameters derived from session state.
//!
//! Everything here feeds rendering only. Control flow never reads it back.

use std::time::Duration;

use crate::rules::Rules;
use crate::session::Session;

const BASE_BEAT_MS: u64 = 1_000;
const BEAT_STEP_MS: u64 = 100;
const MIN_BEAT_MS: u64 = 100;

const BASE_HEART_PX: u32 = 100;
const HEART_PX_PER_CLICK: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmetics {
    /// One full heartbeat. Shrinks with every tap, never below 100ms.
    pub beat_period: Duration,
    /// Nominal heart size; grows without bound.
    pub heart_size_px: u32,
    /// Scale applied to the "yes" button; grows with every rejection.
    pub yes_scale: f32,
}

impl Cosmetics {
    #[must_use]
    pub fn derive(session: &Session, rules: &Rules) -> Self {
        Self {
            beat_period: beat_period(session.click_count()),
            heart_size_px: heart_size_px(session.click_count()),
            yes_scale: yes_scale(session.no_rejections(), rules.yes_growth),
        }
    }

    /// Heart size relative to its starting size.
    #[must_use]
    pub fn heart_scale(&self) -> f32 {
        self.heart_size_px as f32 / BASE_HEART_PX as f32
    }
}

#[must_use]
pub fn beat_period(clicks: u32) -> Duration {
    let shrink = u64::from(clicks).saturating_mul(BEAT_STEP_MS);
    Duration::from_millis(BASE_BEAT_MS.saturating_sub(shrink).max(MIN_BEAT_MS))
}

#[must_use]
pub fn heart_size_px(clicks: u32) -> u32 {
    BASE_HEART_PX.saturating_add(clicks.saturating_mul(HEART_PX_PER_CLICK))
}

#[must_use]
pub fn yes_scale(rejections: u32, growth: f32) -> f32 {
    1.0 + growth * rejections as f32
}
