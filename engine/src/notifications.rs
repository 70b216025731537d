//! Transient messages shown over the current screen.
//!
//! Toasts are pure UI feedback. They never influence the session and are
//! dropped once their display time runs out.

use std::collections::VecDeque;
use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// The one-time notice after enough rejections.
    Escalation,
    /// Something went wrong that the user should know about.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    kind: ToastKind,
    text: String,
    remaining: Duration,
}

impl Toast {
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// FIFO of toasts. Only the front one is visible and counts down.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast. Text identical to one already queued is ignored.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        let text = text.into();
        if self.pending.iter().any(|t| t.text == text) {
            return;
        }
        self.pending.push_back(Toast {
            kind,
            text,
            remaining: TOAST_DURATION,
        });
    }

    pub fn advance(&mut self, mut delta: Duration) {
        while let Some(front) = self.pending.front_mut() {
            if delta < front.remaining {
                front.remaining -= delta;
                return;
            }
            delta -= front.remaining;
            self.pending.pop_front();
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.pending.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
