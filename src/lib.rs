//! Savings Projection - month-by-month compound interest with periodic contributions
//!
//! This library provides:
//! - Period-unit normalization (monthly/yearly rate and contribution, months/years horizon)
//! - The compounding recurrence producing accumulated and invested series
//! - Summary totals read from the series
//! - Chart and summary display adapters
//! - Batch scenario runs from CSV

pub mod error;
pub mod input;
pub mod projection;
pub mod chart;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, InvalidField, InvalidInputError, Result};
pub use input::{ProjectionInput, InterestPeriod, ContributionPeriod, TimePeriod, Scenario};
pub use projection::{ProjectionEngine, ProjectionConfig, Projection, ProjectionSeries, ProjectionSummary};
pub use chart::{AxisScale, ChartData};
pub use report::{MoneyFormat, SummaryDisplay};
pub use scenario::{ScenarioRunner, ScenarioOutcome};
