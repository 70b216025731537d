//! Core engine for Cupid - session ownership and effect execution.
//!
//! This crate contains the App without terminal dependencies. The pure
//! transition lives in `cupid-types`; the App feeds it events, performs the
//! effects it returns against a [`CounterStore`], and keeps the view state the
//! renderer reads.

mod notifications;
mod view_state;

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

pub use cupid_config::{ConfigError, CupidConfig};
pub use cupid_store::{CounterStore, JsonCounterStore, MemoryCounterStore, StoreError};
pub use cupid_types::ui::{ButtonFocus, CardEffect, CardEffectKind, Celebration, UiOptions};
pub use cupid_types::{
    Affordance, Choice, Cosmetics, Effect, Event, GlobalCounters, ProgressMessages, Rules,
    Session, Stage, Transition, transition, wording,
};

pub use notifications::{TOAST_DURATION, Toast, ToastKind, ToastQueue};
pub use view_state::{CELEBRATION_DURATION, POP_DURATION, SHAKE_DURATION, ViewState};

const SAVE_FAILED_NOTICE: &str = "Couldn't save your answer. The tally may be out of date.";

/// Everything about a run that comes from configuration.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    pub rules: Rules,
    pub progress: ProgressMessages,
    pub ui_options: UiOptions,
}

impl AppSettings {
    pub fn from_config(config: &CupidConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: config.rules()?,
            progress: config.progress_messages()?,
            ui_options: config.ui_options(),
        })
    }
}

pub struct App {
    session: Session,
    settings: AppSettings,
    store: Box<dyn CounterStore>,
    /// Tallies snapshotted on entering `Answered`.
    summary: Option<GlobalCounters>,
    toasts: ToastQueue,
    save_failure_shown: bool,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: AppSettings, store: Box<dyn CounterStore>) -> Self {
        let view = ViewState::new(settings.ui_options);
        Self {
            session: Session::new(),
            settings,
            store,
            summary: None,
            toasts: ToastQueue::new(),
            save_failure_shown: false,
            view,
            should_quit: false,
        }
    }

    /// Build from a loaded config, backed by the configured counter file.
    pub fn from_config(config: &CupidConfig) -> Result<Self, ConfigError> {
        let settings = AppSettings::from_config(config)?;
        let store = config.counter_store();
        info!(path = %store.path().display(), schema = ?store.schema(), "Using counter store");
        Ok(Self::new(settings, Box::new(store)))
    }

    /// Apply one user event. Returns whether it was on offer.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let before = self.session.stage();
        let Transition {
            session,
            effects,
            accepted,
        } = transition(&self.session, event, &self.settings.rules);

        if !accepted {
            debug!(?event, stage = ?before, "Ignored event not on offer");
            return false;
        }

        self.session = session;
        for effect in effects {
            self.perform(effect);
        }

        if event == Event::ChooseNo {
            self.view.start_effect(CardEffect::new(CardEffectKind::Shake, SHAKE_DURATION));
            if self.session.no_withdrawn(&self.settings.rules) {
                self.view.focus = ButtonFocus::Yes;
            }
        }

        let after = self.session.stage();
        if after != before {
            self.enter_stage(after);
        }
        true
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Record(choice) => match self.store.record(choice) {
                Ok(counters) => {
                    debug!(
                        choice = choice.as_str(),
                        yes_total = counters.yes_total,
                        no_total = counters.no_total,
                        "Counter updated"
                    );
                }
                Err(e) => {
                    warn!(choice = choice.as_str(), "Failed to record response: {e}");
                    if !self.save_failure_shown {
                        self.save_failure_shown = true;
                        self.toasts.push(ToastKind::Warning, SAVE_FAILED_NOTICE);
                    }
                }
            },
            Effect::Escalate => {
                info!(
                    rejections = self.session.no_rejections(),
                    "Escalation notice shown"
                );
                self.toasts
                    .push(ToastKind::Escalation, wording::ESCALATION_NOTICE);
            }
        }
    }

    fn enter_stage(&mut self, stage: Stage) {
        info!(?stage, clicks = self.session.click_count(), "Stage changed");
        self.view.start_effect(CardEffect::new(CardEffectKind::PopScale, POP_DURATION));
        match stage {
            Stage::Proposal => self.view.focus = ButtonFocus::Yes,
            Stage::Answered => {
                self.summary = Some(self.store.read());
                self.view.celebrate();
            }
            Stage::Counting => {}
        }
    }

    pub fn heart(&mut self) -> bool {
        self.dispatch(Event::Heart)
    }

    pub fn choose_yes(&mut self) -> bool {
        self.dispatch(Event::ChooseYes)
    }

    pub fn choose_no(&mut self) -> bool {
        self.dispatch(Event::ChooseNo)
    }

    /// Move keyboard focus between the proposal buttons. Stays on "yes" when
    /// "no" is not on offer.
    pub fn focus_next(&mut self) {
        if self.session.stage() != Stage::Proposal {
            return;
        }
        let next = self.view.focus.toggle();
        if next == ButtonFocus::No && !self.offers(Affordance::No) {
            self.view.focus = ButtonFocus::Yes;
        } else {
            self.view.focus = next;
        }
    }

    /// The primary action for the current screen: tap the heart while
    /// counting, press the focused button on the proposal.
    pub fn activate(&mut self) -> bool {
        match self.session.stage() {
            Stage::Counting => self.heart(),
            Stage::Proposal => match self.view.focus {
                ButtonFocus::Yes => self.choose_yes(),
                ButtonFocus::No => self.choose_no(),
            },
            Stage::Answered => false,
        }
    }

    pub fn tick(&mut self) {
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    /// Move every animation clock and toast timer forward by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.view.advance(delta);
        self.toasts.advance(delta);
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.settings.rules
    }

    #[must_use]
    pub fn offers(&self, affordance: Affordance) -> bool {
        self.session.offers(affordance, &self.settings.rules)
    }

    #[must_use]
    pub fn no_withdrawn(&self) -> bool {
        self.session.no_withdrawn(&self.settings.rules)
    }

    #[must_use]
    pub fn cosmetics(&self) -> Cosmetics {
        Cosmetics::derive(&self.session, &self.settings.rules)
    }

    /// Current heartbeat scale factor; constant when motion is reduced.
    #[must_use]
    pub fn heart_pulse(&self) -> f32 {
        if self.view.ui_options.reduced_motion {
            1.0
        } else {
            self.view.heartbeat.scale(self.cosmetics().beat_period)
        }
    }

    /// Encouragement for the taps so far. None before the first tap.
    #[must_use]
    pub fn progress_message(&self) -> Option<&str> {
        self.settings
            .progress
            .for_clicks(self.session.click_count())
    }

    #[must_use]
    pub fn summary(&self) -> Option<GlobalCounters> {
        self.summary
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    #[must_use]
    pub fn card_effect(&self) -> Option<&CardEffect> {
        self.view.card_effect.as_ref()
    }

    #[must_use]
    pub fn celebration(&self) -> Option<&Celebration> {
        self.view.celebration.as_ref()
    }

    #[must_use]
    pub fn focus(&self) -> ButtonFocus {
        self.view.focus
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn store_location(&self) -> Option<&Path> {
        self.store.location()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        info!(stage = ?self.session.stage(), "Quit requested");
        self.should_quit = true;
    }
}
