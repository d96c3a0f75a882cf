//! Controller errors.

use crate::core::ChartError;
use thiserror::Error;

/// Errors surfaced by a [`Finite`](super::Finite) controller.
///
/// Rejected transitions are not errors; see
/// [`Outcome::Rejected`](super::Outcome::Rejected).
#[derive(Debug, Error)]
pub enum FiniteError<E: std::error::Error + 'static> {
    #[error("Reducer failed handling '{action}' (next state '{next_state}'): {source}")]
    Reducer {
        action: String,
        next_state: String,
        #[source]
        source: E,
    },

    #[error(transparent)]
    Chart(#[from] ChartError),
}
