//! Actions handed to reducers.

use super::state::{Event, State};
use std::fmt;

/// Display name of the synthetic initialization action.
pub const INIT_ACTION: &str = "@@INIT";

/// What triggered an action.
///
/// `Init` is a separate variant, so it can never collide with a chart
/// event.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionKind<E: Event> {
    /// Seeds the reducer when a controller is constructed.
    Init,

    /// An accepted chart event.
    Event(E),
}

impl<E: Event> ActionKind<E> {
    pub fn name(&self) -> &str {
        match self {
            Self::Init => INIT_ACTION,
            Self::Event(event) => event.name(),
        }
    }

    pub fn is_init(&self) -> bool {
        matches!(self, Self::Init)
    }

    /// The chart event, unless this is the init action.
    pub fn event(&self) -> Option<&E> {
        match self {
            Self::Init => None,
            Self::Event(event) => Some(event),
        }
    }
}

impl<E: Event> fmt::Display for ActionKind<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single reducer input: the event, its payload, and the state the
/// chart is moving to.
///
/// Actions are built per transition and discarded once the reducer has
/// returned.
#[derive(Clone, Debug, PartialEq)]
pub struct Action<S: State, E: Event, P> {
    pub kind: ActionKind<E>,
    pub payload: Option<P>,
    pub next_state: S,
}

impl<S: State, E: Event, P> Action<S, E, P> {
    /// The initialization action for a chart starting in `initial`.
    pub fn init(initial: S) -> Self {
        Self {
            kind: ActionKind::Init,
            payload: None,
            next_state: initial,
        }
    }

    pub fn event(event: E, payload: Option<P>, next_state: S) -> Self {
        Self {
            kind: ActionKind::Event(event),
            payload,
            next_state,
        }
    }
}
