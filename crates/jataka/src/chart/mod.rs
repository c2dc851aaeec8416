//! Birth chart calculation.

pub mod calculator;
pub mod data;

pub use calculator::{ChartCalculator, ChartError};
pub use data::{Chart, ChartRequest};
