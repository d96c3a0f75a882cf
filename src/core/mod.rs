//! Core chart types and the transition engine.
//!
//! This module contains the pure part of Finite:
//! - State and event identifiers
//! - Validated, immutable charts
//! - The table-driven transition engine
//! - Reducer actions and accepted-transition history
//!
//! Nothing in this module owns mutable state; the controller in
//! [`crate::machine`] is the only place a snapshot changes.

mod action;
mod chart;
mod engine;
mod error;
mod history;
mod state;

pub use action::{Action, ActionKind, INIT_ACTION};
pub use chart::{Chart, ChartDefinition, StateNode};
pub use engine::{accepted_events, compute_next, NextState, Rejection};
pub use error::{ChartError, ChartViolation};
pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
