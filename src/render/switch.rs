//! First-match selection between state branches.

use super::matcher::Match;
use crate::machine::{Machine, Reducer};

/// An ordered list of [`Match`] branches; renders the first one tagged
/// with the machine's current state.
///
/// Branches after the first match are never looked at, so two branches
/// tagged with the same state mean the second one is dead.
pub struct Switch<R: Reducer, V> {
    cases: Vec<Match<R, V>>,
}

impl<R: Reducer, V> Switch<R, V> {
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a branch.
    pub fn case(mut self, branch: Match<R, V>) -> Self {
        self.cases.push(branch);
        self
    }

    /// First branch tagged with `state`, in declaration order.
    pub fn select(&self, state: &R::State) -> Option<&Match<R, V>> {
        self.cases.iter().find(|branch| branch.matches(state))
    }

    /// Render the selected branch, or `None` when no branch matches.
    pub fn render(&self, machine: &Machine<'_, R>) -> Option<V>
    where
        V: Clone,
    {
        self.select(machine.state)?.render(machine)
    }

    /// Render the selected branch without requiring `V: Clone`; see
    /// [`Match::render_with`].
    pub fn render_with(
        &self,
        machine: &Machine<'_, R>,
        child: impl FnOnce(&V) -> V,
    ) -> Option<V> {
        self.select(machine.state)?.render_with(machine, child)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<R: Reducer, V> Default for Switch<R, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer, V> From<Vec<Match<R, V>>> for Switch<R, V> {
    fn from(cases: Vec<Match<R, V>>) -> Self {
        Self { cases }
    }
}
