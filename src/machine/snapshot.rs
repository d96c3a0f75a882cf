//! Snapshots and the render-time machine view.

use super::queue::Transitioner;
use super::reducer::Reducer;
use crate::core::State;

/// The paired `(state, data)` value exposed to consumers.
///
/// A controller replaces its snapshot as a whole; the two fields never
/// change independently.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<S, D> {
    pub state: S,
    pub data: D,
}

/// What a render callback receives: the current snapshot plus a handle
/// for requesting transitions.
pub struct Machine<'a, R: Reducer> {
    pub state: &'a R::State,
    pub data: &'a R::Data,
    transitioner: Transitioner<R::Event, R::Payload>,
}

impl<'a, R: Reducer> Machine<'a, R> {
    pub(crate) fn new(
        snapshot: &'a Snapshot<R::State, R::Data>,
        transitioner: Transitioner<R::Event, R::Payload>,
    ) -> Self {
        Self {
            state: &snapshot.state,
            data: &snapshot.data,
            transitioner,
        }
    }

    /// Request a transition. It is applied by the controller's next
    /// `run_pending`.
    pub fn transition(&self, event: R::Event, payload: Option<R::Payload>) {
        self.transitioner.transition(event, payload);
    }

    pub fn send(&self, event: R::Event) {
        self.transitioner.send(event);
    }

    /// A handle that outlives this view, for event handlers and async
    /// completions.
    pub fn transitioner(&self) -> Transitioner<R::Event, R::Payload> {
        self.transitioner.clone()
    }

    pub fn is(&self, state: &R::State) -> bool {
        self.state == state
    }

    pub fn state_name(&self) -> &str {
        self.state.name()
    }
}
