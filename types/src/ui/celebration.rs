//! Balloons drifting up over the summary once the answer is yes.

use std::f32::consts::TAU;
use std::time::Duration;

use super::animation::EffectTimer;

/// Share of the run spent staggering balloon launches.
const STAGGER: f32 = 0.4;
/// Sideways drift as a fraction of the width.
const SWAY: f32 = 0.015;

/// One balloon's place in the frame, as fractions of the area it floats
/// over. `rise` is 0 at the bottom edge and 1 at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    /// Launch order, stable for the whole run.
    pub lane: usize,
    pub column: f32,
    pub rise: f32,
}

#[derive(Debug, Clone)]
pub struct Celebration {
    timer: EffectTimer,
}

impl Celebration {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.timer.is_finished()
    }

    /// Balloons currently in flight out of `count` launched. Each starts at
    /// its own offset so they do not rise in a line.
    #[must_use]
    pub fn balloons(&self, count: usize) -> Vec<Balloon> {
        if count == 0 || self.is_done() {
            return Vec::new();
        }
        let progress = self.timer.progress();
        (0..count)
            .filter_map(|i| {
                // 7 is coprime with the small counts used, so launches shuffle.
                let slot = (i * 7) % count;
                let start = slot as f32 / count as f32 * STAGGER;
                let rise = (progress - start) / (1.0 - STAGGER);
                if rise <= 0.0 || rise >= 1.0 {
                    return None;
                }
                let lane = (i as f32 + 0.5) / count as f32;
                let column = (lane + SWAY * (rise * TAU * 1.5).sin()).clamp(0.0, 1.0);
                Some(Balloon { lane: i, column, rise })
            })
            .collect()
    }
}
