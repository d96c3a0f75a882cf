//! Conditional rendering keyed on the current state.
//!
//! - [`Match`]: content tagged with one state
//! - [`Switch`]: first-match selection over several `Match` branches
//! - [`Component`]: named sub-views usable as `Match` content
//!
//! These hold no state of their own; they re-evaluate against whatever
//! [`Machine`](crate::machine::Machine) they are given.

mod component;
mod matcher;
mod switch;

pub use component::Component;
pub use matcher::{Match, MatchContent};
pub use switch::Switch;
