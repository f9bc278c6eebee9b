//! Projection inputs, period units and scenario loading

mod data;
pub mod loader;

pub use data::{ProjectionInput, InterestPeriod, ContributionPeriod, TimePeriod};
pub use loader::{Scenario, load_scenarios, load_scenarios_from_reader};
