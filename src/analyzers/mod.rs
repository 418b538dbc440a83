//! Grouped aggregation and report selection.
//!
//! Records are grouped by a key column, a numeric column is averaged per
//! group and the groups are ranked by that average.

pub mod aggregate;
pub mod report;
pub mod types;
pub mod utility;
