//! Error taxonomy for loading and reporting.
//!
//! Only fatal conditions live here. A malformed metric value is absorbed by
//! the aggregator and an empty aggregation is an empty report, not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A source file could not be opened or read to the end.
    #[error("cannot read source '{}'", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Every source was read but none of them held a data row.
    #[error("no data to build a report from")]
    NoData,
}

pub type Result<T> = std::result::Result<T, ReportError>;
