//! Chart validation errors.

use thiserror::Error;

/// A single invalid reference found while validating a chart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartViolation {
    #[error("Initial state '{initial}' is not declared")]
    UnknownInitial { initial: String },

    #[error("State '{state}' sends '{event}' to undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("State '{state}' declares event '{event}' more than once")]
    DuplicateEvent { state: String, event: String },
}

/// Errors raised when installing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid chart: {}", describe(.violations))]
    Invalid { violations: Vec<ChartViolation> },

    #[error("Chart definition could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

fn describe(violations: &[ChartViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
