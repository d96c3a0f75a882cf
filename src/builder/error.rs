//! Build errors for the chart builder.

use crate::core::ChartError;
use thiserror::Error;

/// Errors that can occur when building a chart.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Chart(#[from] ChartError),
}
