//! Core projection engine for monthly compounding with periodic contributions

use crate::error::InvalidInputError;
use crate::input::ProjectionInput;
use super::normalize::{normalize, NormalizedInput};
use super::series::{Projection, ProjectionPoint, ProjectionSeries, ProjectionSummary};

/// Horizons longer than this are still computed but logged
pub const LARGE_HORIZON_MONTHS: u32 = 1200;

/// Upper bound on `display_precision`; larger values are clamped
pub const MAX_DISPLAY_PRECISION: u32 = 10;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Decimal places each recorded point is rounded to, at most
    /// `MAX_DISPLAY_PRECISION`. The running values are never rounded.
    pub display_precision: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { display_precision: 2 }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate, normalize, project and summarize one input.
    /// On invalid input nothing is computed.
    pub fn run(&self, input: &ProjectionInput) -> Result<Projection, InvalidInputError> {
        input.validate()?;

        let normalized = normalize(input);
        if normalized.total_months > LARGE_HORIZON_MONTHS {
            log::warn!(
                "Projecting {} months; horizon is unusually long",
                normalized.total_months
            );
        }

        let series = self.project(&normalized, input.present_value);
        let summary = Self::summarize(&series);

        Ok(Projection { series, summary })
    }

    /// Run the compounding recurrence from month 0 to the horizon inclusive.
    ///
    /// Each month records the current totals first, then applies growth
    /// followed by the deposit (contribution at period end).
    pub fn project(&self, normalized: &NormalizedInput, present_value: f64) -> ProjectionSeries {
        let total_months = normalized.total_months;
        let growth = 1.0 + normalized.monthly_rate;

        let mut series = ProjectionSeries::with_capacity(total_months as usize + 1);
        let mut accumulated = present_value;
        let mut invested = present_value;

        for month in 0..=total_months {
            series.push(ProjectionPoint {
                month,
                accumulated: self.round(accumulated),
                invested: self.round(invested),
            });

            if month < total_months {
                accumulated = accumulated * growth + normalized.monthly_contribution;
                invested += normalized.monthly_contribution;
            }
        }

        series
    }

    /// Totals taken from the last point of the series
    pub fn summarize(series: &ProjectionSeries) -> ProjectionSummary {
        match series.last() {
            Some(last) => ProjectionSummary {
                final_value: last.accumulated,
                total_invested: last.invested,
                total_interest: last.accumulated - last.invested,
            },
            None => ProjectionSummary::default(),
        }
    }

    fn round(&self, value: f64) -> f64 {
        let precision = self.config.display_precision.min(MAX_DISPLAY_PRECISION);
        let factor = 10f64.powi(precision as i32);
        (value * factor).round() / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidField;
    use crate::input::{ContributionPeriod, InterestPeriod, TimePeriod};
    use crate::projection::yearly_to_monthly_rate;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn engine() -> ProjectionEngine {
        ProjectionEngine::default()
    }

    fn sample_inputs() -> Vec<ProjectionInput> {
        vec![
            ProjectionInput::monthly(1000.0, 0.01, 0.0, 2),
            ProjectionInput::monthly(0.0, 0.005, 100.0, 3),
            ProjectionInput::monthly(25_000.0, 0.08, 6000.0, 30)
                .with_interest_period(InterestPeriod::Yearly)
                .with_contribution_period(ContributionPeriod::Yearly)
                .with_time_period(TimePeriod::Years),
            ProjectionInput::monthly(12_345.67, 0.0075, 250.0, 1)
                .with_time_period(TimePeriod::Years),
        ]
    }

    #[test]
    fn test_zero_contribution_case() {
        let result = engine().run(&ProjectionInput::monthly(1000.0, 0.01, 0.0, 2)).unwrap();

        let expected = [(0, 1000.0, 1000.0), (1, 1010.0, 1000.0), (2, 1020.1, 1000.0)];
        assert_eq!(result.series.len(), 3);
        for (point, (month, accumulated, invested)) in result.series.iter().zip(expected) {
            assert_eq!(point.month, month);
            assert_eq!(point.accumulated, accumulated);
            assert_eq!(point.invested, invested);
        }
        assert_relative_eq!(result.summary.total_interest, 20.1, epsilon = 1e-9);
    }

    #[test]
    fn test_growth_before_deposit() {
        let config = ProjectionConfig { display_precision: 4 };
        let result = ProjectionEngine::new(config)
            .run(&ProjectionInput::monthly(0.0, 0.005, 100.0, 3))
            .unwrap();

        let acc = result.series.accumulated();
        assert_abs_diff_eq!(acc[0], 0.0);
        assert_abs_diff_eq!(acc[1], 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(acc[2], 200.5, epsilon = 1e-9);
        assert_abs_diff_eq!(acc[3], 301.5025, epsilon = 1e-9);

        // Deposit-then-growth would give 100.50 at month 1
        assert_eq!(result.series.invested(), vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_identity_at_month_zero() {
        for input in sample_inputs() {
            let result = engine().run(&input).unwrap();
            let first = result.series.first().unwrap();
            assert_eq!(first.month, 0);
            assert_abs_diff_eq!(first.accumulated, input.present_value, epsilon = 0.005);
            assert_abs_diff_eq!(first.invested, input.present_value, epsilon = 0.005);
        }
    }

    #[test]
    fn test_length_invariant() {
        for input in sample_inputs() {
            let total_months = normalize(&input).total_months;
            let result = engine().run(&input).unwrap();
            assert_eq!(result.series.len(), total_months as usize + 1);
            assert_eq!(result.series.last().unwrap().month, total_months);
        }
    }

    #[test]
    fn test_monotonic_and_accumulated_covers_invested() {
        for input in sample_inputs() {
            let series = engine().run(&input).unwrap().series;
            for pair in series.points.windows(2) {
                assert!(pair[1].accumulated >= pair[0].accumulated);
                assert!(pair[1].invested >= pair[0].invested);
            }
            assert!(series.iter().all(|p| p.accumulated >= p.invested));
        }
    }

    #[test]
    fn test_summary_consistency() {
        for input in sample_inputs() {
            let result = engine().run(&input).unwrap();
            let last = result.series.last().unwrap();
            assert_eq!(result.summary.final_value, last.accumulated);
            assert_eq!(result.summary.total_invested, last.invested);
            assert_eq!(
                result.summary.total_interest,
                result.summary.final_value - result.summary.total_invested
            );
        }
    }

    #[test]
    fn test_rounding_does_not_feed_back() {
        // 1/3 per month: rounded points drift from a rounded recurrence
        let input = ProjectionInput::monthly(0.0, 0.001, 1.0 / 3.0, 600);
        let result = engine().run(&input).unwrap();

        let mut accumulated: f64 = 0.0;
        for _ in 0..600 {
            accumulated = accumulated * 1.001 + 1.0 / 3.0;
        }
        assert_abs_diff_eq!(result.summary.final_value, accumulated, epsilon = 0.005);
        assert_abs_diff_eq!(result.summary.total_invested, 200.0, epsilon = 0.005);
    }

    #[test]
    fn test_period_normalization_equivalence() {
        let yearly = ProjectionInput::monthly(5000.0, 0.1, 200.0, 5)
            .with_interest_period(InterestPeriod::Yearly)
            .with_time_period(TimePeriod::Years);
        let monthly = ProjectionInput::monthly(5000.0, yearly_to_monthly_rate(0.1), 200.0, 60);

        let a = engine().run(&yearly).unwrap();
        let b = engine().run(&monthly).unwrap();

        assert_eq!(a.series.len(), b.series.len());
        for (pa, pb) in a.series.iter().zip(b.series.iter()) {
            assert_eq!(pa.month, pb.month);
            assert_relative_eq!(pa.accumulated, pb.accumulated, epsilon = 1e-9);
            assert_relative_eq!(pa.invested, pb.invested, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_one_year_gives_thirteen_points() {
        let input = ProjectionInput::monthly(100.0, 0.01, 10.0, 1).with_time_period(TimePeriod::Years);
        let result = engine().run(&input).unwrap();
        assert_eq!(result.series.len(), 13);
        assert_eq!(result.series.months(), (0..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let err = engine().run(&ProjectionInput::monthly(1000.0, 0.0, 100.0, 12)).unwrap_err();
        assert_eq!(err.fields, vec![InvalidField::InterestRate]);
    }

    #[test]
    fn test_zero_principal_zero_contribution() {
        let result = engine().run(&ProjectionInput::monthly(0.0, 0.02, 0.0, 6)).unwrap();
        assert!(result.series.iter().all(|p| p.accumulated == 0.0 && p.invested == 0.0));
        assert_eq!(result.summary, ProjectionSummary::default());
    }

    #[test]
    fn test_oversized_precision_is_clamped() {
        let input = ProjectionInput::monthly(1000.0, 0.01, 0.0, 2);
        let clamped = ProjectionEngine::new(ProjectionConfig {
            display_precision: MAX_DISPLAY_PRECISION,
        })
        .run(&input)
        .unwrap();

        for precision in [400, 3_000_000_000, u32::MAX] {
            let result = ProjectionEngine::new(ProjectionConfig { display_precision: precision })
                .run(&input)
                .unwrap();
            assert!(result.series.iter().all(|p| p.accumulated.is_finite() && p.invested.is_finite()));
            assert!(result.summary.final_value.is_finite());
            assert_eq!(result, clamped);
        }
        assert_abs_diff_eq!(clamped.summary.final_value, 1020.1, epsilon = 1e-9);
    }

    #[test]
    fn test_overflowing_horizon_rejected_before_projecting() {
        let input = ProjectionInput::monthly(1.0, 0.01, 0.0, 400_000_000)
            .with_time_period(TimePeriod::Years);
        let err = engine().run(&input).unwrap_err();
        assert!(err.has_field(InvalidField::HorizonTooLong { max_months: u32::MAX }));
    }

    #[test]
    fn test_summarize_empty_series() {
        let summary = ProjectionEngine::summarize(&ProjectionSeries::default());
        assert_eq!(summary, ProjectionSummary::default());
    }
}
