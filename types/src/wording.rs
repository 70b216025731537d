//! User-facing text.

use thiserror::Error;

pub const DEFAULT_PROGRESS: [&str; 10] = [
    "You can do it!",
    "I love you!",
    "Almost there!",
    "Don't stop!",
    "Keep going!",
    "Beating faster!",
    "POPPING!",
    "Ready?",
    "Now!",
    "BOOM!",
];

pub const COUNTING_TITLE: &str = "A Special Message";
pub const PROPOSAL_TITLE: &str = "Will you be my Valentine?";
pub const ANSWERED_TITLE: &str = "I knew you'd say yes!";
pub const ANSWERED_SUBTITLE: &str = "You have made my Valentine's Day unforgettable.";
pub const ESCALATION_NOTICE: &str = "Will a box of chocolates change your mind?";
pub const WITHDRAWN_NOTICE: &str = "No is no longer an option...";
pub const YES_LABEL: &str = "YES!";
pub const NO_LABEL: &str = "No";
pub const YES_COUNT_LABEL: &str = "Global 'Yes' Count";
pub const NO_COUNT_LABEL: &str = "Global 'No' Attempts";

/// Instruction under the counting title.
#[must_use]
pub fn instruction(heart_clicks: u32) -> String {
    if heart_clicks == 1 {
        "Tap the heart once!".to_string()
    } else {
        format!("Tap the heart {heart_clicks} times!")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("progress messages must contain at least one non-blank entry")]
pub struct EmptyProgressError;

/// Ordered encouragement lines shown while counting heart taps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressMessages(Vec<String>);

impl ProgressMessages {
    /// Build from configured lines. Control characters are stripped and blank
    /// lines dropped.
    pub fn new(lines: Vec<String>) -> Result<Self, EmptyProgressError> {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.chars().filter(|c| !c.is_control()).collect::<String>())
            .filter(|line| !line.trim().is_empty())
            .collect();
        if lines.is_empty() {
            Err(EmptyProgressError)
        } else {
            Ok(Self(lines))
        }
    }

    /// Message for `clicks` taps: `table[min(clicks - 1, len - 1)]`, none at zero.
    #[must_use]
    pub fn for_clicks(&self, clicks: u32) -> Option<&str> {
        let index = usize::try_from(clicks.checked_sub(1)?).unwrap_or(usize::MAX);
        let last = self.0.len() - 1;
        self.0.get(index.min(last)).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ProgressMessages {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS.iter().map(ToString::to_string).collect())
    }
}
