use serde::{Deserialize, Serialize};

/// Alerting thresholds applied during a monitoring cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// CPU usage percentage that raises `cpu_high`
    pub cpu_percent: f64,
    /// RAM usage percentage that raises `ram_high` and triggers a working-set trim
    pub ram_percent: f64,
    /// Per-volume usage percentage that raises `disk_low_<mount>`
    pub disk_percent: f64,
    /// Charge percentage below which `battery_low` fires while discharging
    pub battery_low_percent: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cpu_percent: 90.0,
            ram_percent: 90.0,
            disk_percent: 90.0,
            battery_low_percent: 25.0,
        }
    }
}
