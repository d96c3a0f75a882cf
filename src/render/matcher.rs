//! Per-state conditional content.

use super::component::Component;
use crate::machine::{Machine, Reducer};

type Callback<R, V> = Box<dyn Fn(&Machine<'_, R>) -> V>;

/// The content a [`Match`] renders, after priority resolution.
pub enum MatchContent<'a, R: Reducer, V> {
    /// A named sub-view.
    View(&'a dyn Component<R, Output = V>),

    /// A render callback.
    Callback(&'a dyn Fn(&Machine<'_, R>) -> V),

    /// Inline content, rendered as-is.
    Child(&'a V),
}

/// Content tagged with the state it belongs to.
///
/// A match renders only while the machine is in its state. Content can be
/// supplied in three forms; when several are set, the named view wins,
/// then the callback, then the inline child.
///
/// # Example
///
/// ```rust
/// use finite::builder::ChartBuilder;
/// use finite::core::Action;
/// use finite::machine::{reducer_fn, Finite};
/// use finite::render::Match;
/// use std::convert::Infallible;
///
/// let chart = ChartBuilder::new()
///     .initial("error".to_string())
///     .terminal("error".to_string())
///     .build()
///     .unwrap();
/// let reducer = reducer_fn(|_: Option<&()>, _: &Action<String, String, ()>| Ok::<_, Infallible>(()));
/// let finite = Finite::new(chart, reducer).unwrap();
///
/// let error = Match::new("error".to_string()).child("Uh oh, search failed.");
/// let photo = Match::new("photo".to_string()).child("<img>");
///
/// assert_eq!(finite.render(|m| error.render(m)), Some("Uh oh, search failed."));
/// assert_eq!(finite.render(|m| photo.render(m)), None);
/// ```
pub struct Match<R: Reducer, V> {
    state: R::State,
    view: Option<Box<dyn Component<R, Output = V>>>,
    callback: Option<Callback<R, V>>,
    child: Option<V>,
}

impl<R: Reducer, V> Match<R, V> {
    pub fn new(state: R::State) -> Self {
        Self {
            state,
            view: None,
            callback: None,
            child: None,
        }
    }

    /// Render a named sub-view.
    pub fn view<C>(mut self, component: C) -> Self
    where
        C: Component<R, Output = V> + 'static,
    {
        self.view = Some(Box::new(component));
        self
    }

    /// Render through a callback that receives the machine.
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Machine<'_, R>) -> V + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Render fixed inline content.
    pub fn child(mut self, child: V) -> Self {
        self.child = Some(child);
        self
    }

    /// The state this match is tagged with.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn matches(&self, state: &R::State) -> bool {
        self.state == *state
    }

    /// The content that would render, by priority.
    pub fn content(&self) -> Option<MatchContent<'_, R, V>> {
        if let Some(view) = &self.view {
            return Some(MatchContent::View(view.as_ref()));
        }
        if let Some(callback) = &self.callback {
            return Some(MatchContent::Callback(callback.as_ref()));
        }
        self.child.as_ref().map(MatchContent::Child)
    }

    /// Render for `machine`, or `None` when the machine is elsewhere or
    /// no content was supplied.
    pub fn render(&self, machine: &Machine<'_, R>) -> Option<V>
    where
        V: Clone,
    {
        self.render_with(machine, V::clone)
    }

    /// Like [`Match::render`], with `child` turning inline content into an
    /// owned view. Views and callbacks are rendered directly, so `V` need
    /// not be `Clone`.
    pub fn render_with(
        &self,
        machine: &Machine<'_, R>,
        child: impl FnOnce(&V) -> V,
    ) -> Option<V> {
        if !self.matches(machine.state) {
            return None;
        }

        match self.content()? {
            MatchContent::View(view) => Some(view.render(machine)),
            MatchContent::Callback(callback) => Some(callback(machine)),
            MatchContent::Child(inline) => Some(child(inline)),
        }
    }
}
