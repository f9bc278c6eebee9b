//! Error types for input validation and scenario loading

use std::fmt;
use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// A single input field that failed precondition validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    /// Interest rate is zero, negative or not a number
    InterestRate,
    /// Total time is missing, non-numeric or zero
    TotalTime,
    /// Horizon in months exceeds `max_months` (or does not fit in a `u32`)
    HorizonTooLong { max_months: u32 },
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidField::InterestRate => f.write_str("interest rate must be greater than zero"),
            InvalidField::TotalTime => {
                f.write_str("total time must be a whole number greater than zero")
            }
            InvalidField::HorizonTooLong { max_months } => {
                write!(f, "total time must not exceed {} months", max_months)
            }
        }
    }
}

/// Raised when a projection input fails validation. No series is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid input: {}", join_messages(.fields))]
pub struct InvalidInputError {
    pub fields: Vec<InvalidField>,
}

impl InvalidInputError {
    pub fn new(fields: Vec<InvalidField>) -> Self {
        Self { fields }
    }

    /// Whether the given field is among the rejected ones
    pub fn has_field(&self, field: InvalidField) -> bool {
        self.fields.contains(&field)
    }
}

fn join_messages(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(InvalidField::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to parse a period unit from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParsePeriodError {
    pub kind: &'static str,
    pub value: String,
}

/// Errors raised while loading or running projections
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario {scenario_id}: {source}")]
    UnknownPeriod {
        scenario_id: u32,
        #[source]
        source: ParsePeriodError,
    },

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}
