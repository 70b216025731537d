//! Per-visit interaction state and its transition function.
//!
//! A [`Session`] is a plain value. [`transition`] maps `(session, event)` to the
//! next session plus the side effects the host must perform (recording a
//! choice, showing the escalation notice). Nothing here performs IO, so every
//! rule can be exercised without a terminal or a counter file.
//!
//! ```text
//! Counting --heart x heart_clicks--> Proposal --yes--> Answered
//!                                      |  ^
//!                                      no-+   (withdrawn after withdraw_no_at)
//! ```

use crate::rules::Rules;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Counting,
    Proposal,
    Answered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// User interactions the state machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Heart,
    ChooseYes,
    ChooseNo,
}

/// Things the UI can offer. Mirrors [`Event`] one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Heart,
    Yes,
    No,
}

impl From<Event> for Affordance {
    fn from(event: Event) -> Self {
        match event {
            Event::Heart => Self::Heart,
            Event::ChooseYes => Self::Yes,
            Event::ChooseNo => Self::No,
        }
    }
}

/// Side effects requested by a transition, performed by the host in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Add one to the matching global counter.
    Record(Choice),
    /// Fire the one-time escalation notice.
    Escalate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    click_count: u32,
    stage: Stage,
    no_rejections: u32,
    final_choice: Option<Choice>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn no_rejections(&self) -> u32 {
        self.no_rejections
    }

    #[must_use]
    pub fn final_choice(&self) -> Option<Choice> {
        self.final_choice
    }

    /// True once the "no" button has been withdrawn for this session.
    #[must_use]
    pub fn no_withdrawn(&self, rules: &Rules) -> bool {
        self.no_rejections >= rules.withdraw_no_at
    }

    /// Whether `affordance` is currently available to the user.
    #[must_use]
    pub fn offers(&self, affordance: Affordance, rules: &Rules) -> bool {
        match (self.stage, affordance) {
            (Stage::Counting, Affordance::Heart) | (Stage::Proposal, Affordance::Yes) => true,
            (Stage::Proposal, Affordance::No) => !self.no_withdrawn(rules),
            _ => false,
        }
    }

    /// Taps still needed before the proposal appears.
    #[must_use]
    pub fn clicks_remaining(&self, rules: &Rules) -> u32 {
        rules.heart_clicks.saturating_sub(self.click_count)
    }
}

/// Result of applying one [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<Effect>,
    /// False when the event was not on offer; `session` is then unchanged.
    pub accepted: bool,
}

impl Transition {
    fn ignored(session: Session) -> Self {
        Self {
            session,
            effects: Vec::new(),
            accepted: false,
        }
    }

    fn applied(session: Session, effects: Vec<Effect>) -> Self {
        Self {
            session,
            effects,
            accepted: true,
        }
    }
}

/// Apply `event` to `session` under `rules`.
///
/// Total: events that are not offered in the current state are ignored rather
/// than rejected with an error.
#[must_use]
pub fn transition(session: &Session, event: Event, rules: &Rules) -> Transition {
    if !session.offers(event.into(), rules) {
        return Transition::ignored(*session);
    }

    let mut next = *session;
    match event {
        Event::Heart => {
            next.click_count = next.click_count.saturating_add(1);
            if next.click_count >= rules.heart_clicks {
                next.stage = Stage::Proposal;
            }
            Transition::applied(next, Vec::new())
        }
        Event::ChooseYes => {
            next.stage = Stage::Answered;
            next.final_choice = Some(Choice::Yes);
            Transition::applied(next, vec![Effect::Record(Choice::Yes)])
        }
        Event::ChooseNo => {
            next.no_rejections = next.no_rejections.saturating_add(1);
            let mut effects = vec![Effect::Record(Choice::No)];
            if next.no_rejections == rules.escalation_at {
                effects.push(Effect::Escalate);
            }
            Transition::applied(next, effects)
        }
    }
}
