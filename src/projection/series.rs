//! Output structures for projections

use serde::{Deserialize, Serialize};

/// Accumulated and invested totals at the start of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub accumulated: f64,
    pub invested: f64,
}

/// Month-by-month trajectory, month 0 through the horizon inclusive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Accumulated values indexed by month
    pub fn accumulated(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.accumulated).collect()
    }

    /// Invested values indexed by month
    pub fn invested(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.invested).collect()
    }

    pub fn months(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.month).collect()
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Scalar totals read from the last point of a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_value: f64,
    pub total_invested: f64,
    pub total_interest: f64,
}

/// Complete result of one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub series: ProjectionSeries,
    pub summary: ProjectionSummary,
}
