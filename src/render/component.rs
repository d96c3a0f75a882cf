//! Named sub-views.

use crate::machine::{Machine, Reducer};

/// A reusable view that renders from the current machine.
///
/// This is the "named sub-view" form of [`Match`](super::Match) content.
/// Closures work too: any `Fn(&Machine) -> V` is a component.
pub trait Component<R: Reducer> {
    type Output;

    fn render(&self, machine: &Machine<'_, R>) -> Self::Output;
}

impl<R, V, F> Component<R> for F
where
    R: Reducer,
    F: Fn(&Machine<'_, R>) -> V,
{
    type Output = V;

    fn render(&self, machine: &Machine<'_, R>) -> V {
        self(machine)
    }
}
