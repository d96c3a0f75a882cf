//! Identifier traits for chart states and chart events.
//!
//! A chart is keyed by states and, per state, by the events that state
//! accepts. Both are plain values: enums generated with [`state_enum!`] /
//! [`event_enum!`], or `String` for charts loaded at runtime.
//!
//! [`state_enum!`]: crate::state_enum
//! [`event_enum!`]: crate::event_enum

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for chart states.
///
/// All methods are pure. A state is an immutable value naming one node of
/// the chart.
///
/// # Required Traits
///
/// - `Clone`: states are copied into snapshots, actions and history
/// - `PartialEq`: the transition engine looks states up by equality
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: charts can be loaded from JSON
///
/// # Example
///
/// ```rust
/// use finite::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for chart events (the `type` of a transition request).
///
/// Events share the requirements of [`State`]: they are compared by
/// equality when the engine looks up a state's `on` table.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Loading,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "start",
                Self::Loading => "loading",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Start.name(), "start");
        assert_eq!(TestState::Loading.name(), "loading");
    }

    #[test]
    fn string_is_a_state_and_an_event() {
        let state = String::from("gallery");
        assert_eq!(State::name(&state), "gallery");
        assert_eq!(Event::name(&state), "gallery");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Loading;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
