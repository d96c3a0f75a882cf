//! The Finite controller: a chart and a reducer behind one snapshot.

use super::error::FiniteError;
use super::queue::Transitioner;
use super::reducer::Reducer;
use super::snapshot::{Machine, Snapshot};
use crate::core::{
    compute_next, Action, Chart, Event, NextState, Rejection, State, StateHistory,
    StateTransition, INIT_ACTION,
};
use chrono::Utc;
use tracing::{debug, debug_span, trace, warn, Span};
use uuid::Uuid;

/// Result of a single transition request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<S: State> {
    /// The snapshot moved from `from` to `to`.
    Accepted { from: S, to: S },

    /// The chart does not allow the event here; nothing changed.
    Rejected(Rejection),
}

impl<S: State> Outcome<S> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

type Renderer<R> = Box<dyn FnMut(&Machine<'_, R>)>;

/// Transitions a controller keeps in its history unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Owns the current `(state, data)` snapshot for one UI region.
///
/// The only ways to change the snapshot are [`Finite::transition`] and the
/// queued requests applied by [`Finite::run_pending`]. Every accepted
/// transition runs the chart lookup and then the reducer, and replaces
/// state and data together.
///
/// # Example
///
/// ```rust
/// use finite::builder::ChartBuilder;
/// use finite::machine::{reducer_fn, Finite};
/// use finite::core::Action;
/// use std::convert::Infallible;
///
/// let chart = ChartBuilder::new()
///     .initial("idle".to_string())
///     .transition("idle".to_string(), "START".to_string(), "running".to_string())
///     .terminal("running".to_string())
///     .build()
///     .unwrap();
///
/// let reducer = reducer_fn(|data: Option<&u32>, _action: &Action<String, String, ()>| {
///     Ok::<_, Infallible>(data.map_or(0, |n| n + 1))
/// });
///
/// let mut finite = Finite::new(chart, reducer).unwrap();
/// finite.send("START".to_string()).unwrap();
///
/// assert_eq!(finite.state(), "running");
/// assert_eq!(*finite.data(), 1);
///
/// // `running` accepts nothing: the request is a no-op.
/// assert!(!finite.send("START".to_string()).unwrap().is_accepted());
/// assert_eq!(*finite.data(), 1);
/// ```
pub struct Finite<R: Reducer> {
    id: Uuid,
    chart: Chart<R::State, R::Event>,
    reducer: R,
    snapshot: Snapshot<R::State, R::Data>,
    history: StateHistory<R::State, R::Event>,
    queue: Transitioner<R::Event, R::Payload>,
    renderer: Option<Renderer<R>>,
    span: Span,
}

impl<R: Reducer> Finite<R> {
    /// Install `chart` and seed the data with the reducer's init action.
    pub fn new(chart: Chart<R::State, R::Event>, reducer: R) -> Result<Self, FiniteError<R::Error>> {
        let id = Uuid::new_v4();
        let span = debug_span!("finite", %id);
        let initial = chart.initial().clone();

        let data = reducer
            .reduce(None, &Action::init(initial.clone()))
            .map_err(|source| {
                span.in_scope(|| warn!(error = %source, "reducer failed on init"));
                FiniteError::Reducer {
                    action: INIT_ACTION.to_string(),
                    next_state: initial.name().to_string(),
                    source,
                }
            })?;

        span.in_scope(|| debug!(initial = initial.name(), "controller initialized"));

        Ok(Self {
            id,
            chart,
            reducer,
            snapshot: Snapshot {
                state: initial,
                data,
            },
            history: StateHistory::with_limit(DEFAULT_HISTORY_LIMIT),
            queue: Transitioner::new(),
            renderer: None,
            span,
        })
    }

    /// Parse a JSON chart and install it.
    pub fn from_json(chart: &str, reducer: R) -> Result<Self, FiniteError<R::Error>> {
        Self::new(Chart::from_json(chart)?, reducer)
    }

    /// Identifier used in this controller's log span.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn chart(&self) -> &Chart<R::State, R::Event> {
        &self.chart
    }

    pub fn snapshot(&self) -> &Snapshot<R::State, R::Data> {
        &self.snapshot
    }

    pub fn state(&self) -> &R::State {
        &self.snapshot.state
    }

    pub fn data(&self) -> &R::Data {
        &self.snapshot.data
    }

    /// Transitions accepted so far.
    pub fn history(&self) -> &StateHistory<R::State, R::Event> {
        &self.history
    }

    /// Keep at most `limit` transitions in the history, dropping the
    /// oldest ones. Entries already recorded are discarded.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = StateHistory::with_limit(limit);
        self
    }

    /// Move the recorded history out, leaving an empty one behind.
    pub fn take_history(&mut self) -> StateHistory<R::State, R::Event> {
        self.history.take()
    }

    /// Whether the current state accepts `event` (pure).
    pub fn accepts(&self, event: &R::Event) -> bool {
        compute_next(&self.chart, &self.snapshot.state, event).is_accepted()
    }

    /// A handle for queueing transitions from outside a render.
    pub fn transitioner(&self) -> Transitioner<R::Event, R::Payload> {
        self.queue.clone()
    }

    /// Apply `event` now.
    ///
    /// Rejected events return `Ok(Outcome::Rejected)` and leave the
    /// snapshot, the history and the renderer untouched. A reducer error
    /// is returned as-is and also leaves the snapshot untouched.
    pub fn transition(
        &mut self,
        event: R::Event,
        payload: Option<R::Payload>,
    ) -> Result<Outcome<R::State>, FiniteError<R::Error>> {
        let span = self.span.clone();
        let _entered = span.enter();

        let next_state = match compute_next(&self.chart, &self.snapshot.state, &event) {
            NextState::Accepted(next_state) => next_state,
            NextState::Rejected(reason) => {
                trace!(
                    state = self.snapshot.state.name(),
                    event = event.name(),
                    %reason,
                    "transition rejected"
                );
                return Ok(Outcome::Rejected(reason));
            }
        };

        let action = Action::event(event.clone(), payload, next_state.clone());
        let data = self
            .reducer
            .reduce(Some(&self.snapshot.data), &action)
            .map_err(|source| {
                warn!(
                    state = self.snapshot.state.name(),
                    event = event.name(),
                    error = %source,
                    "reducer failed"
                );
                FiniteError::Reducer {
                    action: event.name().to_string(),
                    next_state: next_state.name().to_string(),
                    source,
                }
            })?;

        let previous = std::mem::replace(
            &mut self.snapshot,
            Snapshot {
                state: next_state.clone(),
                data,
            },
        );

        debug!(
            from = previous.state.name(),
            to = next_state.name(),
            event = event.name(),
            "transition accepted"
        );

        self.history.push(StateTransition {
            from: previous.state.clone(),
            to: next_state.clone(),
            event,
            timestamp: Utc::now(),
        });
        self.notify();

        Ok(Outcome::Accepted {
            from: previous.state,
            to: next_state,
        })
    }

    /// Apply `event` with no payload.
    pub fn send(&mut self, event: R::Event) -> Result<Outcome<R::State>, FiniteError<R::Error>> {
        self.transition(event, None)
    }

    /// Apply queued requests in the order they were made.
    ///
    /// Requests queued while this runs (for example by the renderer) are
    /// applied in the same call. Stops at the first reducer error; later
    /// requests stay queued.
    pub fn run_pending(&mut self) -> Result<Vec<Outcome<R::State>>, FiniteError<R::Error>> {
        let mut outcomes = Vec::new();
        while let Some(request) = self.queue.pop() {
            outcomes.push(self.transition(request.event, request.payload)?);
        }
        Ok(outcomes)
    }

    /// The current render-time view.
    pub fn machine(&self) -> Machine<'_, R> {
        Machine::new(&self.snapshot, self.queue.clone())
    }

    /// Render the current snapshot with `view`.
    pub fn render<V>(&self, view: impl FnOnce(&Machine<'_, R>) -> V) -> V {
        view(&self.machine())
    }

    /// Install the callback run after every accepted transition.
    pub fn set_renderer<F>(&mut self, renderer: F)
    where
        F: FnMut(&Machine<'_, R>) + 'static,
    {
        self.renderer = Some(Box::new(renderer));
    }

    /// Run the renderer once for the current snapshot.
    pub fn mount(&mut self) {
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            let machine = Machine::new(&self.snapshot, self.queue.clone());
            renderer(&machine);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ChartBuilder;
    use crate::core::ActionKind;
    use crate::machine::reducer::reducer_fn;
    use crate::{event_enum, state_enum};
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;
    use thiserror::Error;

    state_enum! {
        enum Phase {
            Start = "start",
            Loading = "loading",
            Gallery = "gallery",
            Error = "error",
        }
    }

    event_enum! {
        enum Signal {
            Search = "SEARCH",
            Success = "SEARCH_SUCCESS",
            Failure = "SEARCH_FAILURE",
            Cancel = "CANCEL_SEARCH",
        }
    }

    #[derive(Debug, Error)]
    #[error("reducer refused {0}")]
    struct Refused(String);

    fn chart() -> Chart<Phase, Signal> {
        ChartBuilder::new()
            .initial(Phase::Start)
            .transition(Phase::Start, Signal::Search, Phase::Loading)
            .transition(Phase::Loading, Signal::Success, Phase::Gallery)
            .transition(Phase::Loading, Signal::Failure, Phase::Error)
            .transition(Phase::Loading, Signal::Cancel, Phase::Gallery)
            .transition(Phase::Error, Signal::Search, Phase::Loading)
            .transition(Phase::Gallery, Signal::Search, Phase::Loading)
            .build()
            .unwrap()
    }

    fn log_reducer(
    ) -> impl Reducer<State = Phase, Event = Signal, Payload = u32, Data = Vec<String>, Error = Infallible>
    {
        reducer_fn(|data: Option<&Vec<String>>, action: &Action<Phase, Signal, u32>| {
            let mut log = data.cloned().unwrap_or_default();
            log.push(format!(
                "{}->{}:{}",
                action.kind,
                action.next_state.name(),
                action.payload.unwrap_or_default()
            ));
            Ok::<_, Infallible>(log)
        })
    }

    #[test]
    fn new_seeds_data_with_init_action() {
        let finite = Finite::new(chart(), log_reducer()).unwrap();

        assert_eq!(finite.state(), &Phase::Start);
        assert_eq!(finite.data(), &vec!["@@INIT->start:0".to_string()]);
        assert!(finite.history().is_empty());
    }

    #[test]
    fn accepted_transition_updates_state_and_data_together() {
        let mut finite = Finite::new(chart(), log_reducer()).unwrap();

        let outcome = finite.transition(Signal::Search, Some(7)).unwrap();

        assert_eq!(
            outcome,
            Outcome::Accepted {
                from: Phase::Start,
                to: Phase::Loading
            }
        );
        assert_eq!(
            finite.snapshot(),
            &Snapshot {
                state: Phase::Loading,
                data: vec!["@@INIT->start:0".to_string(), "SEARCH->loading:7".to_string()],
            }
        );
        assert_eq!(finite.history().get_path(), vec![&Phase::Start, &Phase::Loading]);
    }

    #[test]
    fn rejected_transition_changes_nothing() {
        let mut finite = Finite::new(chart(), log_reducer()).unwrap();
        let before = finite.snapshot().clone();

        let outcome = finite.send(Signal::Success).unwrap();

        assert_eq!(outcome, Outcome::Rejected(Rejection::EventNotAccepted));
        assert_eq!(finite.snapshot(), &before);
        assert!(finite.history().is_empty());
    }

    #[test]
    fn reducer_error_propagates_and_keeps_snapshot() {
        let reducer = reducer_fn(|data: Option<&u32>, action: &Action<Phase, Signal, ()>| {
            match &action.kind {
                ActionKind::Event(Signal::Failure) => Err(Refused(action.kind.name().to_string())),
                _ => Ok(data.map_or(0, |n| n + 1)),
            }
        });
        let mut finite = Finite::new(chart(), reducer).unwrap();
        finite.send(Signal::Search).unwrap();

        let err = finite.send(Signal::Failure).unwrap_err();

        match err {
            FiniteError::Reducer {
                action,
                next_state,
                source,
            } => {
                assert_eq!(action, "SEARCH_FAILURE");
                assert_eq!(next_state, "error");
                assert_eq!(source.to_string(), "reducer refused SEARCH_FAILURE");
            }
            other => panic!("Expected reducer error, got {other:?}"),
        }
        assert_eq!(finite.state(), &Phase::Loading);
        assert_eq!(*finite.data(), 1);
        assert_eq!(finite.history().len(), 1);
    }

    #[test]
    fn reducer_error_on_init_fails_construction() {
        let reducer = reducer_fn(|_: Option<&u32>, action: &Action<Phase, Signal, ()>| {
            Err::<u32, _>(Refused(action.kind.name().to_string()))
        });

        let result = Finite::new(chart(), reducer);

        assert!(matches!(
            result,
            Err(FiniteError::Reducer { ref action, .. }) if action == "@@INIT"
        ));
    }

    fn counter() -> impl Reducer<State = Phase, Event = Signal, Payload = (), Data = u32, Error = Infallible>
    {
        reducer_fn(|data: Option<&u32>, _: &Action<Phase, Signal, ()>| {
            Ok::<_, Infallible>(data.map_or(0, |n| n + 1))
        })
    }

    #[test]
    fn history_is_bounded_by_default() {
        let mut finite = Finite::new(chart(), counter()).unwrap();
        finite.send(Signal::Search).unwrap();
        finite.send(Signal::Cancel).unwrap();

        for _ in 0..DEFAULT_HISTORY_LIMIT {
            finite.send(Signal::Search).unwrap();
            finite.send(Signal::Cancel).unwrap();
        }

        assert_eq!(finite.history().len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(*finite.data(), 2 * DEFAULT_HISTORY_LIMIT as u32 + 2);
        assert_eq!(
            finite.history().transitions().last().map(|t| t.to),
            Some(Phase::Gallery)
        );
    }

    #[test]
    fn history_limit_drops_oldest_transitions() {
        let mut finite = Finite::new(chart(), counter()).unwrap().with_history_limit(3);

        finite.send(Signal::Search).unwrap();
        finite.send(Signal::Failure).unwrap();
        finite.send(Signal::Search).unwrap();
        finite.send(Signal::Cancel).unwrap();

        assert_eq!(finite.history().len(), 3);
        assert_eq!(
            finite.history().get_path(),
            vec![&Phase::Loading, &Phase::Error, &Phase::Loading, &Phase::Gallery]
        );
    }

    #[test]
    fn take_history_drains_recorded_transitions() {
        let mut finite = Finite::new(chart(), counter()).unwrap().with_history_limit(8);
        finite.send(Signal::Search).unwrap();
        finite.send(Signal::Cancel).unwrap();

        let taken = finite.take_history();
        finite.send(Signal::Search).unwrap();

        assert_eq!(taken.events(), vec![&Signal::Search, &Signal::Cancel]);
        assert_eq!(finite.history().len(), 1);
        assert_eq!(finite.history().limit(), Some(8));
    }

    #[test]
    fn renderer_runs_on_mount_and_accepted_transitions_only() {
        let mut finite = Finite::new(chart(), log_reducer()).unwrap();
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&rendered);
        finite.set_renderer(move |machine| sink.borrow_mut().push(*machine.state));

        finite.mount();
        finite.send(Signal::Search).unwrap();
        finite.send(Signal::Search).unwrap();
        finite.send(Signal::Failure).unwrap();

        assert_eq!(
            *rendered.borrow(),
            vec![Phase::Start, Phase::Loading, Phase::Error]
        );
    }

    #[test]
    fn queued_requests_apply_in_call_order() {
        let mut finite = Finite::new(chart(), log_reducer()).unwrap();
        let handle = finite.transitioner();

        finite.render(|machine| machine.send(Signal::Search));
        handle.transition(Signal::Success, Some(2));
        handle.send(Signal::Cancel);

        let outcomes = finite.run_pending().unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_accepted());
        assert!(outcomes[1].is_accepted());
        assert_eq!(outcomes[2], Outcome::Rejected(Rejection::EventNotAccepted));
        assert_eq!(finite.state(), &Phase::Gallery);
        assert_eq!(handle.pending(), 0);
    }

    #[test]
    fn renderer_requests_are_drained_in_the_same_run() {
        let mut finite = Finite::new(chart(), log_reducer()).unwrap();
        finite.set_renderer(|machine| {
            if machine.is(&Phase::Loading) {
                machine.transition(Signal::Success, Some(1));
            }
        });

        finite.transitioner().send(Signal::Search);
        let outcomes = finite.run_pending().unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(finite.state(), &Phase::Gallery);
    }

    #[test]
    fn accepts_reflects_current_state() {
        let mut finite = Finite::new(chart(), log_reducer()).unwrap();

        assert!(finite.accepts(&Signal::Search));
        assert!(!finite.accepts(&Signal::Cancel));

        finite.send(Signal::Search).unwrap();
        assert!(finite.accepts(&Signal::Cancel));
    }

    #[test]
    fn from_json_installs_chart() {
        let finite = Finite::from_json(
            r#"{ "initial": "start", "states": { "start": { "on": { "SEARCH": "loading" } }, "loading": {} } }"#,
            log_reducer(),
        )
        .unwrap();

        assert_eq!(finite.state(), &Phase::Start);
        assert!(finite.accepts(&Signal::Search));
    }

    #[test]
    fn from_json_reports_invalid_chart() {
        let result = Finite::from_json(
            r#"{ "initial": "start", "states": { "start": { "on": { "SEARCH": "loading" } } } }"#,
            log_reducer(),
        );

        assert!(matches!(result, Err(FiniteError::Chart(_))));
    }

    #[test]
    fn controllers_get_distinct_ids() {
        let a = Finite::new(chart(), log_reducer()).unwrap();
        let b = Finite::new(chart(), log_reducer()).unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
