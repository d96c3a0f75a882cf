//! Builder API for ergonomic chart construction.
//!
//! This module provides a fluent chart builder and macros for declaring
//! state and event enums with minimal boilerplate.

pub mod chart;
pub mod error;
pub mod macros;

pub use chart::ChartBuilder;
pub use error::BuildError;
