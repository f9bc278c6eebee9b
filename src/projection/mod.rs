//! Projection engine: period normalization, compounding recurrence and totals

mod normalize;
mod engine;
mod series;

pub use normalize::{NormalizedInput, normalize, yearly_to_monthly_rate};
pub use engine::{ProjectionEngine, ProjectionConfig, LARGE_HORIZON_MONTHS, MAX_DISPLAY_PRECISION};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary, Projection};
