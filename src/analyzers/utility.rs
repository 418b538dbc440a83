/// Parses a metric cell as a float. Surrounding whitespace is ignored.
///
/// Returns `None` for blank cells, text that is not a number, and NaN, so the
/// caller can skip the record. Infinities are kept.
pub fn parse_metric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Rounds to two decimal places, halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
