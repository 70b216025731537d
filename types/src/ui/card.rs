//! Short one-shot animations applied to the card holding the current stage.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffectKind {
    /// Grow into place when a stage appears.
    PopScale,
    /// Wobble sideways after a "no".
    Shake,
}

#[derive(Debug, Clone)]
pub struct CardEffect {
    kind: CardEffectKind,
    timer: EffectTimer,
}

impl CardEffect {
    #[must_use]
    pub fn new(kind: CardEffectKind, duration: Duration) -> Self {
        Self {
            kind,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardEffectKind {
        self.kind
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    /// Fraction of the effect already played, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase() == AnimPhase::Completed
    }
}
