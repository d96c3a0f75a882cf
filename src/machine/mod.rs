//! The Finite controller and its collaborators.
//!
//! This is the stateful shell around [`crate::core`]:
//!
//! - [`Reducer`]: consumer-supplied `(data, action) -> data`
//! - [`Finite`]: owns the snapshot and applies transitions
//! - [`Machine`]: what render callbacks see
//! - [`Transitioner`]: queues requests from callbacks and async completions
//!
//! Everything here is single-threaded. A transition runs the engine and
//! the reducer to completion before the next one starts.

mod controller;
mod error;
mod queue;
mod reducer;
mod snapshot;

pub use controller::{Finite, Outcome, DEFAULT_HISTORY_LIMIT};
pub use error::FiniteError;
pub use queue::{Request, Transitioner};
pub use reducer::{reducer_fn, FnReducer, Reducer, ReducerAction};
pub use snapshot::{Machine, Snapshot};
