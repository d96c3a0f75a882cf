//! Builder for constructing charts.

use crate::builder::error::BuildError;
use crate::core::{Chart, ChartDefinition, Event, State, StateNode};

/// Builder for constructing charts with a fluent API.
///
/// States are declared in call order. `transition` declares its source
/// state on first use, so a chart can be written as a list of edges;
/// target-only states still need an explicit `.state(..)`.
pub struct ChartBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Vec<(S, StateNode<S, E>)>,
}

impl<S: State, E: Event> ChartBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state with its full `on` table.
    pub fn state(mut self, state: S, node: StateNode<S, E>) -> Self {
        self.states.push((state, node));
        self
    }

    /// Declare a state that accepts no events.
    pub fn terminal(self, state: S) -> Self {
        self.state(state, StateNode::new())
    }

    /// Add one `from --event--> to` edge.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        match self.states.iter_mut().find(|(state, _)| *state == from) {
            Some((_, node)) => node.on.push((event, to)),
            None => self.states.push((from, StateNode::new().on(event, to))),
        }
        self
    }

    /// Build and validate the chart.
    pub fn build(self) -> Result<Chart<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Chart::new(ChartDefinition {
            initial,
            states: self.states,
        })?)
    }
}

impl<S: State, E: Event> Default for ChartBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
