//! Accepted-transition history.
//!
//! Provides immutable tracking of the transitions a controller has
//! accepted. Rejected requests never appear here.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use finite::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "start".to_string(),
///     to: "loading".to_string(),
///     event: "SEARCH".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, "SEARCH");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition
    pub event: E,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions.
///
/// `record` returns a new history with the transition added and leaves
/// the original untouched. A history built with [`StateHistory::with_limit`]
/// keeps only the most recent transitions.
///
/// # Example
///
/// ```rust
/// use finite::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: "start".to_string(),
///     to: "loading".to_string(),
///     event: "SEARCH".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec!["start", "loading"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: VecDeque<StateTransition<S, E>>,
    /// Maximum number of transitions kept; the oldest are dropped first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// An empty history that keeps at most the `limit` most recent
    /// transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, dropping the oldest entries past the
    /// limit.
    pub(crate) fn push(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Move the recorded transitions out, leaving an empty history with
    /// the same limit.
    pub(crate) fn take(&mut self) -> Self {
        let empty = Self {
            transitions: VecDeque::new(),
            limit: self.limit,
        };
        std::mem::replace(self, empty)
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first `from` state, then
    /// the `to` state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events in the order they were accepted.
    pub fn events(&self) -> Vec<&E> {
        self.transitions.iter().map(|t| &t.event).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S, E>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, to: &str, event: &str) -> StateTransition<String, String> {
        StateTransition {
            from: from.to_string(),
            to: to.to_string(),
            event: event.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<String, String> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition("start", "loading", "SEARCH"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition("start", "loading", "SEARCH"))
            .record(transition("loading", "error", "SEARCH_FAILURE"))
            .record(transition("error", "loading", "SEARCH"));

        assert_eq!(history.get_path(), vec!["start", "loading", "error", "loading"]);
        assert_eq!(history.events(), vec!["SEARCH", "SEARCH_FAILURE", "SEARCH"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(transition("start", "loading", "SEARCH"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(transition("loading", "gallery", "SEARCH_SUCCESS"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition("start", "loading", "SEARCH"));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition("start", "loading", "SEARCH"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<String, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }

    #[test]
    fn limited_history_keeps_most_recent() {
        let mut history = StateHistory::with_limit(2);
        history.push(transition("start", "loading", "SEARCH"));
        history.push(transition("loading", "error", "SEARCH_FAILURE"));
        history.push(transition("error", "loading", "SEARCH"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec!["loading", "error", "loading"]);
    }

    #[test]
    fn record_respects_limit() {
        let history = StateHistory::with_limit(1)
            .record(transition("start", "loading", "SEARCH"))
            .record(transition("loading", "gallery", "CANCEL_SEARCH"));

        assert_eq!(history.len(), 1);
        assert_eq!(history.events(), vec!["CANCEL_SEARCH"]);
        assert_eq!(history.limit(), Some(1));
    }

    #[test]
    fn take_leaves_empty_history_with_same_limit() {
        let mut history = StateHistory::with_limit(4);
        history.push(transition("start", "loading", "SEARCH"));

        let taken = history.take();

        assert_eq!(taken.len(), 1);
        assert!(history.is_empty());
        assert_eq!(history.limit(), Some(4));
    }
}
