//! Transition engine: table lookup over a chart.
//!
//! The engine is a pure function of the chart, the current state and the
//! requested event. It never sees the data and never fails: events the
//! current state does not accept are rejected, which callers treat as a
//! no-op.

use super::chart::Chart;
use super::state::{Event, State};
use std::fmt;

/// Why a transition request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The current state is not declared in the chart.
    UnknownState,

    /// The current state does not accept the event.
    EventNotAccepted,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownState => f.write_str("state is not declared"),
            Self::EventNotAccepted => f.write_str("event is not accepted by state"),
        }
    }
}

/// Result of looking up a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum NextState<S: State> {
    /// The chart moves to this state.
    Accepted(S),

    /// No state change.
    Rejected(Rejection),
}

impl<S: State> NextState<S> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(self) -> Option<S> {
        match self {
            Self::Accepted(state) => Some(state),
            Self::Rejected(_) => None,
        }
    }
}

/// Compute the state reached from `current` when `event` fires (pure).
///
/// # Example
///
/// ```rust
/// use finite::core::{compute_next, Chart, ChartDefinition, NextState, Rejection, StateNode};
///
/// let chart: Chart<String, String> = Chart::new(ChartDefinition {
///     initial: "start".into(),
///     states: vec![
///         ("start".into(), StateNode::new().on("SEARCH".into(), "loading".into())),
///         ("loading".into(), StateNode::new()),
///     ],
/// })
/// .unwrap();
///
/// assert_eq!(
///     compute_next(&chart, &"start".into(), &"SEARCH".into()),
///     NextState::Accepted("loading".to_string())
/// );
/// assert_eq!(
///     compute_next(&chart, &"loading".into(), &"SEARCH".into()),
///     NextState::Rejected(Rejection::EventNotAccepted)
/// );
/// ```
pub fn compute_next<S: State, E: Event>(chart: &Chart<S, E>, current: &S, event: &E) -> NextState<S> {
    let Some(node) = chart.node(current) else {
        return NextState::Rejected(Rejection::UnknownState);
    };

    match node.target(event) {
        Some(target) => NextState::Accepted(target.clone()),
        None => NextState::Rejected(Rejection::EventNotAccepted),
    }
}

/// Events `state` accepts, in declaration order. Empty for undeclared states.
pub fn accepted_events<'a, S: State, E: Event>(chart: &'a Chart<S, E>, state: &S) -> Vec<&'a E> {
    chart
        .node(state)
        .map(|node| node.events().collect())
        .unwrap_or_default()
}
