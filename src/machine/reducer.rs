//! Reducers: consumer-owned data transitions.

use crate::core::{Action, Event, State};
use std::marker::PhantomData;

/// Shorthand for the action type a reducer receives.
pub type ReducerAction<R> =
    Action<<R as Reducer>::State, <R as Reducer>::Event, <R as Reducer>::Payload>;

/// Computes the next data value from the current one and an action.
///
/// `data` is `None` exactly once: for the [`ActionKind::Init`] action sent
/// when a controller is constructed. That is where a reducer defines its
/// initial data. Reducers must not mutate anything; every call returns a
/// new value or an error, and errors propagate to the caller of
/// `transition`.
///
/// [`ActionKind::Init`]: crate::core::ActionKind::Init
///
/// # Example
///
/// ```rust
/// use finite::core::{Action, ActionKind};
/// use finite::machine::Reducer;
/// use std::convert::Infallible;
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = String;
///     type Event = String;
///     type Payload = u32;
///     type Data = u32;
///     type Error = Infallible;
///
///     fn reduce(
///         &self,
///         data: Option<&u32>,
///         action: &Action<String, String, u32>,
///     ) -> Result<u32, Infallible> {
///         let current = data.copied().unwrap_or_default();
///         Ok(match &action.kind {
///             ActionKind::Init => 0,
///             ActionKind::Event(_) => current + action.payload.unwrap_or(1),
///         })
///     }
/// }
/// ```
pub trait Reducer {
    type State: State;
    type Event: Event;
    type Payload;
    type Data;
    type Error: std::error::Error + Send + Sync + 'static;

    fn reduce(
        &self,
        data: Option<&Self::Data>,
        action: &Action<Self::State, Self::Event, Self::Payload>,
    ) -> Result<Self::Data, Self::Error>;
}

/// A [`Reducer`] backed by a closure. Built with [`reducer_fn`].
pub struct FnReducer<S, E, P, D, Err, F> {
    reduce: F,
    _phantom: PhantomData<fn() -> (S, E, P, D, Err)>,
}

/// Wrap a closure as a reducer.
///
/// ```rust
/// use finite::machine::reducer_fn;
/// use std::convert::Infallible;
///
/// let reducer = reducer_fn(|data: Option<&Vec<String>>, action: &finite::core::Action<String, String, ()>| {
///     let mut seen = data.cloned().unwrap_or_default();
///     seen.push(action.kind.name().to_string());
///     Ok::<_, Infallible>(seen)
/// });
/// # let _ = reducer;
/// ```
pub fn reducer_fn<S, E, P, D, Err, F>(reduce: F) -> FnReducer<S, E, P, D, Err, F>
where
    S: State,
    E: Event,
    Err: std::error::Error + Send + Sync + 'static,
    F: Fn(Option<&D>, &Action<S, E, P>) -> Result<D, Err>,
{
    FnReducer {
        reduce,
        _phantom: PhantomData,
    }
}

impl<S, E, P, D, Err, F> Reducer for FnReducer<S, E, P, D, Err, F>
where
    S: State,
    E: Event,
    Err: std::error::Error + Send + Sync + 'static,
    F: Fn(Option<&D>, &Action<S, E, P>) -> Result<D, Err>,
{
    type State = S;
    type Event = E;
    type Payload = P;
    type Data = D;
    type Error = Err;

    fn reduce(&self, data: Option<&D>, action: &Action<S, E, P>) -> Result<D, Err> {
        (self.reduce)(data, action)
    }
}
