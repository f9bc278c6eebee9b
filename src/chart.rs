//! Chart-ready view of a projection series
//!
//! A line chart consumes two parallel series (accumulated and invested) plus
//! month labels. When the horizon was given in years, the x axis collapses to
//! whole-year ticks and intermediate labels are suppressed.

use crate::input::TimePeriod;
use crate::projection::ProjectionSeries;
use serde::{Deserialize, Serialize};

/// How month indices are labelled on the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Months,
    Years,
}

impl From<TimePeriod> for AxisScale {
    fn from(period: TimePeriod) -> Self {
        match period {
            TimePeriod::Months => AxisScale::Months,
            TimePeriod::Years => AxisScale::Years,
        }
    }
}

impl AxisScale {
    /// Tick label for a month index, or `None` when the label is hidden
    pub fn tick_label(&self, month: u32) -> Option<String> {
        match self {
            AxisScale::Months => Some(format!("{}m", month)),
            AxisScale::Years if month % 12 == 0 => Some(format!("{}y", month / 12)),
            AxisScale::Years => None,
        }
    }
}

/// Parallel sequences indexed by month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub axis: AxisScale,
    pub labels: Vec<u32>,
    pub accumulated: Vec<f64>,
    pub invested: Vec<f64>,
}

impl ChartData {
    pub fn from_series(series: &ProjectionSeries, axis: AxisScale) -> Self {
        Self {
            axis,
            labels: series.months(),
            accumulated: series.accumulated(),
            invested: series.invested(),
        }
    }

    /// Cleared chart shown after a failed calculation
    pub fn empty(axis: AxisScale) -> Self {
        Self {
            axis,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tick labels aligned with `labels`
    pub fn tick_labels(&self) -> Vec<Option<String>> {
        self.labels.iter().map(|&m| self.axis.tick_label(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionInput;
    use crate::projection::ProjectionEngine;

    #[test]
    fn test_month_ticks() {
        assert_eq!(AxisScale::Months.tick_label(0).as_deref(), Some("0m"));
        assert_eq!(AxisScale::Months.tick_label(13).as_deref(), Some("13m"));
    }

    #[test]
    fn test_year_ticks_suppress_intermediate_months() {
        assert_eq!(AxisScale::Years.tick_label(0).as_deref(), Some("0y"));
        assert_eq!(AxisScale::Years.tick_label(13), None);
        assert_eq!(AxisScale::Years.tick_label(24).as_deref(), Some("2y"));
    }

    #[test]
    fn test_from_series() {
        let input = ProjectionInput::monthly(100.0, 0.01, 10.0, 2)
            .with_time_period(TimePeriod::Years);
        let series = ProjectionEngine::default().run(&input).unwrap().series;
        let chart = ChartData::from_series(&series, AxisScale::from(input.time_period));

        assert_eq!(chart.axis, AxisScale::Years);
        assert_eq!(chart.labels.len(), 25);
        assert_eq!(chart.accumulated.len(), 25);
        assert_eq!(chart.invested.len(), 25);
        assert_eq!(chart.accumulated[0], 100.0);

        let shown: Vec<String> = chart.tick_labels().into_iter().flatten().collect();
        assert_eq!(shown, vec!["0y", "1y", "2y"]);
    }

    #[test]
    fn test_empty_chart() {
        let chart = ChartData::empty(AxisScale::Months);
        assert!(chart.is_empty());
        assert!(chart.tick_labels().is_empty());
    }
}
