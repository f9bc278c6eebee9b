//! Input record for a single projection request

use crate::error::{InvalidField, InvalidInputError, ParsePeriodError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which the interest rate is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestPeriod {
    #[default]
    Monthly,
    Yearly,
}

/// Unit in which the periodic contribution is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionPeriod {
    #[default]
    Monthly,
    Yearly,
}

/// Unit in which the horizon is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    #[default]
    Months,
    Years,
}

impl FromStr for InterestPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(InterestPeriod::Monthly),
            "yearly" => Ok(InterestPeriod::Yearly),
            _ => Err(ParsePeriodError { kind: "interest period", value: s.to_string() }),
        }
    }
}

impl FromStr for ContributionPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(ContributionPeriod::Monthly),
            "yearly" => Ok(ContributionPeriod::Yearly),
            _ => Err(ParsePeriodError { kind: "contribution period", value: s.to_string() }),
        }
    }
}

impl FromStr for TimePeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "months" => Ok(TimePeriod::Months),
            "years" => Ok(TimePeriod::Years),
            _ => Err(ParsePeriodError { kind: "time period", value: s.to_string() }),
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePeriod::Months => f.write_str("months"),
            TimePeriod::Years => f.write_str("years"),
        }
    }
}

/// Already-sanitized numeric input for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial principal
    pub present_value: f64,

    /// Periodic rate as a decimal fraction (0.01 = 1%)
    pub interest_rate: f64,

    /// Periodic contribution amount
    pub contribution: f64,

    pub interest_period: InterestPeriod,
    pub contribution_period: ContributionPeriod,

    /// Horizon length; `None` when the caller had no usable value
    pub total_time: Option<u32>,

    pub time_period: TimePeriod,
}

impl ProjectionInput {
    /// Input with every amount quoted monthly and the horizon in months
    pub fn monthly(present_value: f64, interest_rate: f64, contribution: f64, total_months: u32) -> Self {
        Self {
            present_value,
            interest_rate,
            contribution,
            interest_period: InterestPeriod::Monthly,
            contribution_period: ContributionPeriod::Monthly,
            total_time: Some(total_months),
            time_period: TimePeriod::Months,
        }
    }

    pub fn with_interest_period(mut self, period: InterestPeriod) -> Self {
        self.interest_period = period;
        self
    }

    pub fn with_contribution_period(mut self, period: ContributionPeriod) -> Self {
        self.contribution_period = period;
        self
    }

    pub fn with_time_period(mut self, period: TimePeriod) -> Self {
        self.time_period = period;
        self
    }

    /// Horizon in months, or `None` when it is missing or does not fit in a `u32`
    pub fn total_months(&self) -> Option<u32> {
        let total_time = self.total_time?;
        match self.time_period {
            TimePeriod::Months => Some(total_time),
            TimePeriod::Years => total_time.checked_mul(12),
        }
    }

    /// Reject horizons longer than `max_months`.
    ///
    /// The engine itself has no cap; entry points facing untrusted input call
    /// this before running a projection.
    pub fn check_horizon(&self, max_months: u32) -> Result<(), InvalidInputError> {
        let too_long = match self.total_time {
            Some(_) => self.total_months().map_or(true, |months| months > max_months),
            None => false,
        };

        if too_long {
            Err(InvalidInputError::new(vec![InvalidField::HorizonTooLong { max_months }]))
        } else {
            Ok(())
        }
    }

    /// Check the preconditions for a projection.
    ///
    /// Only the rate and the horizon are checked. A zero principal or a zero
    /// contribution is a legal degenerate projection.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let mut fields = Vec::new();

        // Negated comparison also rejects NaN
        if !(self.interest_rate > 0.0) {
            fields.push(InvalidField::InterestRate);
        }

        if !matches!(self.total_time, Some(t) if t > 0) {
            fields.push(InvalidField::TotalTime);
        } else if self.total_months().is_none() {
            fields.push(InvalidField::HorizonTooLong { max_months: u32::MAX });
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(InvalidInputError::new(fields))
        }
    }
}
