//! Declarative state charts.
//!
//! A chart names an initial state and, for every state, the events that
//! state accepts together with their target states. Charts are pure data:
//! they are validated once when constructed and never change afterwards.

use super::error::{ChartError, ChartViolation};
use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The `on` table of a single state: accepted events and their targets.
///
/// Entries keep their declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateNode<S: State, E: Event> {
    #[serde(default, with = "ordered")]
    pub on: Vec<(E, S)>,
}

impl<S: State, E: Event> StateNode<S, E> {
    /// Create a node that accepts no events.
    pub fn new() -> Self {
        Self { on: Vec::new() }
    }

    /// Accept `event` and move to `target` when it fires.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.on.push((event, target));
        self
    }

    /// Target state for `event`, if this node accepts it (pure).
    pub fn target(&self, event: &E) -> Option<&S> {
        self.on
            .iter()
            .find(|(accepted, _)| accepted == event)
            .map(|(_, target)| target)
    }

    /// Events accepted by this node, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.on.iter().map(|(event, _)| event)
    }
}

impl<S: State, E: Event> Default for StateNode<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated chart definition, in the declarative shape consumers write:
///
/// ```json
/// { "initial": "start", "states": { "start": { "on": { "SEARCH": "loading" } } } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ChartDefinition<S: State, E: Event> {
    pub initial: S,
    #[serde(with = "ordered")]
    pub states: Vec<(S, StateNode<S, E>)>,
}

/// A validated, immutable state chart.
///
/// Every `on` target and the initial state are guaranteed to be declared
/// states, so the transition engine can only ever produce declared states.
///
/// # Example
///
/// ```rust
/// use finite::core::{Chart, ChartDefinition, StateNode};
///
/// let chart: Chart<String, String> = Chart::new(ChartDefinition {
///     initial: "idle".to_string(),
///     states: vec![
///         (
///             "idle".to_string(),
///             StateNode::new().on("START".to_string(), "running".to_string()),
///         ),
///         ("running".to_string(), StateNode::new()),
///     ],
/// })
/// .unwrap();
///
/// assert!(chart.contains(&"running".to_string()));
/// assert!(chart.is_terminal(&"running".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Chart<S: State, E: Event> {
    definition: ChartDefinition<S, E>,
}

impl<S: State, E: Event> Chart<S, E> {
    /// Validate a definition and build the chart.
    ///
    /// All violations are reported together rather than stopping at the
    /// first dangling reference.
    pub fn new(definition: ChartDefinition<S, E>) -> Result<Self, ChartError> {
        match validate(&definition) {
            Validation::Success(_) => Ok(Self { definition }),
            Validation::Failure(violations) => Err(ChartError::Invalid {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }

    /// Parse and validate a chart from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let definition: ChartDefinition<S, E> = serde_json::from_str(json)?;
        Self::new(definition)
    }

    /// Parse and validate a chart from an already decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ChartError> {
        let definition: ChartDefinition<S, E> = serde_json::from_value(value)?;
        Self::new(definition)
    }

    /// Render the chart back to its JSON form.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(&self.definition)?)
    }

    pub fn initial(&self) -> &S {
        &self.definition.initial
    }

    pub fn definition(&self) -> &ChartDefinition<S, E> {
        &self.definition
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.definition.states.iter().map(|(state, _)| state)
    }

    /// The `on` table for `state`, if the state is declared.
    pub fn node(&self, state: &S) -> Option<&StateNode<S, E>> {
        self.definition
            .states
            .iter()
            .find(|(declared, _)| declared == state)
            .map(|(_, node)| node)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.node(state).is_some()
    }

    /// A declared state that accepts no events.
    pub fn is_terminal(&self, state: &S) -> bool {
        self.node(state).is_some_and(|node| node.on.is_empty())
    }
}

fn validate<S: State, E: Event>(
    definition: &ChartDefinition<S, E>,
) -> Validation<(), NonEmptyVec<ChartViolation>> {
    let declared = |state: &S| definition.states.iter().any(|(s, _)| s == state);
    let mut checks: Vec<Validation<(), NonEmptyVec<ChartViolation>>> = Vec::new();

    if !declared(&definition.initial) {
        checks.push(Validation::fail(ChartViolation::UnknownInitial {
            initial: definition.initial.name().to_string(),
        }));
    }

    for (index, (state, node)) in definition.states.iter().enumerate() {
        if definition.states[..index].iter().any(|(s, _)| s == state) {
            checks.push(Validation::fail(ChartViolation::DuplicateState {
                state: state.name().to_string(),
            }));
        }

        for (position, (event, target)) in node.on.iter().enumerate() {
            if node.on[..position].iter().any(|(e, _)| e == event) {
                checks.push(Validation::fail(ChartViolation::DuplicateEvent {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                }));
            }

            if !declared(target) {
                checks.push(Validation::fail(ChartViolation::UnknownTarget {
                    state: state.name().to_string(),
                    event: event.name().to_string(),
                    target: target.name().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Serde adapter storing a JSON object as an ordered list of entries.
mod ordered {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<K, V, Ser>(entries: &Vec<(K, V)>, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        K: Serialize,
        V: Serialize,
        Ser: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
        where
            K: Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = Vec<(K, V)>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
