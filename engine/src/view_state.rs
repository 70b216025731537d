//! View state for rendering.
//!
//! Everything the renderer needs that is not part of the session itself:
//! animation clocks, keyboard focus and display options.

use std::time::{Duration, Instant};

use cupid_types::ui::{ButtonFocus, CardEffect, Celebration, Heartbeat, UiOptions};

pub const POP_DURATION: Duration = Duration::from_millis(220);
pub const SHAKE_DURATION: Duration = Duration::from_millis(320);
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(2_400);

#[derive(Debug)]
pub struct ViewState {
    /// Which proposal button Enter activates.
    pub focus: ButtonFocus,
    pub heartbeat: Heartbeat,
    /// Active card animation effect.
    pub card_effect: Option<CardEffect>,
    /// Balloons after a yes; runs once.
    pub celebration: Option<Celebration>,
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            focus: ButtonFocus::default(),
            heartbeat: Heartbeat::default(),
            card_effect: None,
            celebration: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    /// Start `effect` unless motion is reduced.
    pub fn start_effect(&mut self, effect: CardEffect) {
        if self.ui_options.reduced_motion {
            self.card_effect = None;
        } else {
            self.card_effect = Some(effect);
        }
    }

    pub fn celebrate(&mut self) {
        if !self.ui_options.reduced_motion {
            self.celebration = Some(Celebration::new(CELEBRATION_DURATION));
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.heartbeat.advance(delta);
        if let Some(party) = self.celebration.as_mut() {
            party.advance(delta);
            if party.is_done() {
                self.celebration = None;
            }
        }
        if let Some(effect) = self.card_effect.as_mut() {
            effect.advance(delta);
            if effect.is_done() {
                self.card_effect = None;
            }
        }
    }
}
