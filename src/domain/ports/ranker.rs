/// Metric by which process consumers are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    Cpu,
    Memory,
}

pub trait ProcessRanker: Send + Sync {
    /// Returns a human-readable summary of the top `n` processes by the
    /// given metric. When the process table cannot be read this yields
    /// the `"unknown"` sentinel instead of failing, so an alert can
    /// still be raised without its consumer detail.
    fn top_consumers(&self, metric: RankMetric, n: usize) -> String;
}
