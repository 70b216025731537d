//! Core domain types for Cupid.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod cosmetics;
mod counters;
mod rules;
mod session;
pub mod ui;
pub mod wording;

pub use cosmetics::{Cosmetics, beat_period, heart_size_px, yes_scale};
pub use counters::{CounterSchema, GlobalCounters};
pub use rules::{
    DEFAULT_ESCALATION_AT, DEFAULT_HEART_CLICKS, DEFAULT_WITHDRAW_NO_AT, DEFAULT_YES_GROWTH, Rules,
    RulesError,
};
pub use session::{Affordance, Choice, Effect, Event, Session, Stage, Transition, transition};
pub use wording::{EmptyProgressError, ProgressMessages};
