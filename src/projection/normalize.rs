//! Reconcile heterogeneous period units into a single monthly timestep

use crate::input::{ContributionPeriod, InterestPeriod, ProjectionInput};

/// Input expressed strictly in monthly terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInput {
    pub monthly_rate: f64,
    pub monthly_contribution: f64,
    pub total_months: u32,
}

/// Compound-equivalent monthly rate: (1 + r)^(1/12) - 1
pub fn yearly_to_monthly_rate(yearly_rate: f64) -> f64 {
    (1.0 + yearly_rate).powf(1.0 / 12.0) - 1.0
}

/// Convert an input to monthly terms. No rounding is applied.
///
/// A missing or overflowing horizon normalizes to zero months; callers validate first.
pub fn normalize(input: &ProjectionInput) -> NormalizedInput {
    let monthly_rate = match input.interest_period {
        InterestPeriod::Monthly => input.interest_rate,
        InterestPeriod::Yearly => yearly_to_monthly_rate(input.interest_rate),
    };

    let monthly_contribution = match input.contribution_period {
        ContributionPeriod::Monthly => input.contribution,
        ContributionPeriod::Yearly => input.contribution / 12.0,
    };

    let total_months = input.total_months().unwrap_or(0);

    log::debug!(
        "Normalized: rate {:.8}/month, contribution {:.4}/month, {} months",
        monthly_rate,
        monthly_contribution,
        total_months
    );

    NormalizedInput {
        monthly_rate,
        monthly_contribution,
        total_months,
    }
}
