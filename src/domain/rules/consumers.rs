/// Sentinel returned when no process could be inspected at all.
pub const UNKNOWN_CONSUMERS: &str = "unknown";

/// Orders `(name, value)` entries descending by value and keeps the first
/// `n`. The sort is stable, so equal values keep their enumeration order.
#[must_use]
pub fn rank_consumers(mut entries: Vec<(String, f64)>, n: usize) -> Vec<(String, f64)> {
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Joins ranked entries into the human-readable form used in alert
/// messages, e.g. `"chrome (42.0%), cargo (11.3%)"`.
#[must_use]
pub fn format_consumers(ranked: &[(String, f64)]) -> String {
    if ranked.is_empty() {
        return UNKNOWN_CONSUMERS.to_string();
    }
    ranked
        .iter()
        .map(|(name, value)| format!("{name} ({value:.1}%)"))
        .collect::<Vec<_>>()
        .join(", ")
}
