//! Monetary formatting and the summary shown next to the chart

use crate::projection::ProjectionSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for NaN or infinite amounts
pub const NOT_A_NUMBER: &str = "—";

/// Currency rendering rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for MoneyFormat {
    /// Brazilian real, the calculator's home locale
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl MoneyFormat {
    pub fn new(symbol: &str, thousands_separator: char, decimal_separator: char) -> Self {
        Self {
            symbol: symbol.to_string(),
            thousands_separator,
            decimal_separator,
        }
    }

    /// Render an amount with grouped thousands and exactly two decimals.
    /// Non-finite amounts render as `NOT_A_NUMBER` after the symbol.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{} {}", self.symbol, NOT_A_NUMBER);
        }

        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

        format!(
            "{} {}{}{}{}",
            self.symbol,
            sign,
            self.group_thousands(whole),
            self.decimal_separator,
            cents
        )
    }

    fn group_thousands(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        grouped
    }
}

/// One labelled, pre-formatted total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

/// The three totals, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDisplay {
    pub final_value: SummaryLine,
    pub total_invested: SummaryLine,
    pub total_interest: SummaryLine,
}

impl SummaryDisplay {
    pub fn new(summary: &ProjectionSummary, money: &MoneyFormat) -> Self {
        let line = |label: &str, amount: f64| SummaryLine {
            label: label.to_string(),
            value: money.format(amount),
        };

        Self {
            final_value: line("Final gross value", summary.final_value),
            total_invested: line("Total invested", summary.total_invested),
            total_interest: line("Total interest", summary.total_interest),
        }
    }

    pub fn lines(&self) -> [&SummaryLine; 3] {
        [&self.final_value, &self.total_invested, &self.total_interest]
    }
}

impl fmt::Display for SummaryDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "  {:<18} {}", format!("{}:", line.label), line.value)?;
        }
        Ok(())
    }
}
