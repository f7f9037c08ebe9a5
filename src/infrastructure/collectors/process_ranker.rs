use std::sync::Mutex;

use sysinfo::System;

use super::sysinfo_sampler::safe_percent;
use crate::domain::ports::ranker::{ProcessRanker, RankMetric};
use crate::domain::rules::{format_consumers, rank_consumers};

/// Ranks processes by CPU or memory share using the `sysinfo` crate.
///
/// Failures degrade instead of propagating: a poisoned lock yields the
/// `"unknown"` sentinel so the caller can still word its alert.
pub struct SysinfoRanker {
    sys: Mutex<System>,
}

impl SysinfoRanker {
    /// Creates a new ranker with pre-initialized process data.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SysinfoRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRanker for SysinfoRanker {
    fn top_consumers(&self, metric: RankMetric, n: usize) -> String {
        let Ok(mut sys) = self.sys.lock() else {
            return format_consumers(&[]);
        };
        sys.refresh_all();

        let total_memory = sys.total_memory();
        let entries: Vec<(String, f64)> = sys
            .processes()
            .values()
            .map(|p| {
                let share = match metric {
                    RankMetric::Cpu => f64::from(p.cpu_usage()),
                    RankMetric::Memory => safe_percent(p.memory(), total_memory),
                };
                (p.name().to_string_lossy().to_string(), share)
            })
            .collect();

        format_consumers(&rank_consumers(entries, n))
    }
}
