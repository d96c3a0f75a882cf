//! Finite: declarative state charts bound to reducers
//!
//! Finite binds a validated, immutable state chart to a consumer-supplied
//! reducer. The chart decides *whether* an event is accepted in the current
//! state; the reducer decides *what data* results. Views select what to show
//! through [`Match`] and [`Switch`], keyed on the current state.
//!
//! # Core Concepts
//!
//! - **Chart**: states, their accepted events, and one target per event
//! - **Reducer**: pure `(data, action) -> data`, called once at init and once per accepted transition
//! - **Finite**: owns the `(state, data)` snapshot and replaces it atomically
//! - **Match / Switch**: per-state conditional rendering
//!
//! # Example
//!
//! ```rust
//! use finite::core::{Action, ActionKind};
//! use finite::machine::{reducer_fn, Finite};
//! use finite::render::{Match, Switch};
//! use std::convert::Infallible;
//!
//! let chart = r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "on": { "START": "running" } },
//!         "running": { "on": { "STOP": "idle" } }
//!     }
//! }"#;
//!
//! let reducer = reducer_fn(|count: Option<&u32>, action: &Action<String, String, ()>| {
//!     Ok::<_, Infallible>(match action.kind {
//!         ActionKind::Init => 0,
//!         ActionKind::Event(_) => count.copied().unwrap_or(0) + 1,
//!     })
//! });
//!
//! let mut finite = Finite::from_json(chart, reducer).unwrap();
//! let view = Switch::new()
//!     .case(Match::new("idle".to_string()).child("Start"))
//!     .case(Match::new("running".to_string()).child("Stop"));
//!
//! assert_eq!(finite.render(|m| view.render(m)), Some("Start"));
//!
//! finite.send("START".to_string()).unwrap();
//! assert_eq!(finite.render(|m| view.render(m)), Some("Stop"));
//! assert_eq!(*finite.data(), 1);
//!
//! // Events the current state does not accept change nothing.
//! assert!(!finite.send("START".to_string()).unwrap().is_accepted());
//! assert_eq!(*finite.data(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod gallery;
pub mod machine;
pub mod render;

// Re-export commonly used types
pub use builder::{BuildError, ChartBuilder};
pub use core::{Action, ActionKind, Chart, ChartError, Event, State};
pub use machine::{Finite, FiniteError, Machine, Outcome, Reducer, Transitioner};
pub use render::{Component, Match, Switch};
