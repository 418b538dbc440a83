use crate::analyzers::types::{GroupStats, ReportRow};
use crate::analyzers::utility::{parse_metric, round2};
use crate::record::Record;
use indexmap::IndexMap;
use std::cmp::Ordering;
use tracing::trace;

/// Which column to group by, which column to average, and the values to
/// assume when a row does not carry either of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanByGroup {
    pub key_field: &'static str,
    pub key_default: &'static str,
    pub metric_field: &'static str,
    pub metric_default: &'static str,
}

/// Average `performance` per `position`.
pub const PERFORMANCE: MeanByGroup = MeanByGroup {
    key_field: "position",
    key_default: "Unknown",
    metric_field: "performance",
    metric_default: "0",
};

impl MeanByGroup {
    /// Folds records into per-group totals, keyed in first-seen order.
    ///
    /// A record whose metric does not parse, or whose row ended before the
    /// metric column, is skipped and touches no group.
    pub fn collect<'a, I>(&self, records: I) -> IndexMap<String, GroupStats>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut groups: IndexMap<String, GroupStats> = IndexMap::new();

        for record in records {
            let key = record.get_or(self.key_field, self.key_default);
            let Some(raw) = record.value_or(self.metric_field, self.metric_default) else {
                trace!(key, "Skipping short record without a metric value");
                continue;
            };

            let Some(value) = parse_metric(raw) else {
                trace!(key, raw, "Skipping record with malformed metric");
                continue;
            };

            match groups.get_mut(key) {
                Some(stats) => stats.add(value),
                None => {
                    let mut stats = GroupStats::default();
                    stats.add(value);
                    groups.insert(key.to_string(), stats);
                }
            }
        }

        groups
    }

    /// Ranks groups by rounded mean, highest first.
    ///
    /// The sort is stable: groups with equal means keep their first-seen order.
    pub fn aggregate<'a, I>(&self, records: I) -> Vec<ReportRow>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut rows: Vec<ReportRow> = self
            .collect(records)
            .into_iter()
            .filter_map(|(position, stats)| {
                stats.mean().map(|mean| ReportRow {
                    position,
                    performance: round2(mean),
                    count: stats.count(),
                })
            })
            .collect();

        rows.sort_by(|a, b| descending(a.performance, b.performance));

        rows
    }
}

/// Highest first. A NaN mean (from `inf` and `-inf` in one group) sorts last;
/// `0.0` and `-0.0` compare equal.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Mean `performance` per `position`, ranked highest first.
pub fn aggregate_performance(records: &[Record]) -> Vec<ReportRow> {
    PERFORMANCE.aggregate(records)
}
