//! Data types used by the aggregation pipeline.

use serde::Serialize;

/// Running totals for one group while records are folded in.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GroupStats {
    pub(crate) sum: f64,
    pub(crate) count: usize,
}

impl GroupStats {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Arithmetic mean, or `None` for a group nothing was added to.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// One line of a ranked report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub position: String,
    /// Group mean rounded to two decimal places.
    pub performance: f64,
    /// Number of records that contributed to the mean.
    #[serde(skip)]
    pub count: usize,
}
