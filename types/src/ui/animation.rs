use std::time::Duration;

/// Peak scale reached halfway through a heartbeat.
const BEAT_PEAK_SCALE: f32 = 1.1;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

/// Looping heartbeat: `scale(1) -> scale(1.1) -> scale(1)` once per period.
#[derive(Debug, Clone, Default)]
pub struct Heartbeat {
    elapsed: Duration,
}

impl Heartbeat {
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Position within the current beat, in `[0, 1)`.
    #[must_use]
    pub fn cycle_position(&self, period: Duration) -> f32 {
        if period.is_zero() {
            return 0.0;
        }
        let period_ns = period.as_nanos();
        let into_beat = self.elapsed.as_nanos() % period_ns;
        (into_beat as f64 / period_ns as f64) as f32
    }

    #[must_use]
    pub fn scale(&self, period: Duration) -> f32 {
        let t = self.cycle_position(period);
        let rise = 1.0 - (2.0 * t - 1.0).abs();
        1.0 + (BEAT_PEAK_SCALE - 1.0) * rise
    }
}
