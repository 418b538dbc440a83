use crate::analyzers::aggregate::aggregate_performance;
use crate::analyzers::types::ReportRow;
use crate::error::{ReportError, Result};
use crate::record::Record;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Report types the tool knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Average performance per position
    Performance,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Performance => "performance",
        }
    }

    fn build(&self, records: &[Record]) -> Vec<ReportRow> {
        match self {
            ReportKind::Performance => aggregate_performance(records),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished report, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: ReportKind,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// True when the input had rows but none of them could be aggregated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the requested report from the loaded records.
///
/// # Errors
///
/// Returns [`ReportError::NoData`] when `records` is empty. An input whose
/// rows are all skipped is not an error; it yields an empty [`Report`].
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn generate_report(kind: ReportKind, records: &[Record]) -> Result<Report> {
    if records.is_empty() {
        return Err(ReportError::NoData);
    }

    let rows = kind.build(records);
    info!(groups = rows.len(), "Report generated");

    Ok(Report { kind, rows })
}
