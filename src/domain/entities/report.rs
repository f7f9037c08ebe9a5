use serde::{Deserialize, Serialize};

use super::battery::BatteryReading;
use super::network::NetworkReport;
use super::resources::ResourceUsage;

/// Everything one cycle measured, alert-worthy or not.
///
/// Ephemeral: built fresh each run, surviving only as the logged summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    pub resources: ResourceUsage,
    /// RAM usage re-read after a working-set trim, when one ran.
    pub ram_after_reclaim: Option<f64>,
    pub network: NetworkReport,
    pub battery: Option<BatteryReading>,
}

impl CycleReport {
    /// One-line status aggregating every measurement.
    #[must_use]
    pub fn summary(&self) -> String {
        let ram = match self.ram_after_reclaim {
            Some(after) => format!(
                "RAM {:.1}% (after trim: {after:.1}%)",
                self.resources.ram_percent
            ),
            None => format!("RAM {:.1}%", self.resources.ram_percent),
        };

        let disks = self
            .resources
            .disks
            .iter()
            .map(|d| format!("{} {:.1}%", d.mount_point, d.used_percent))
            .collect::<Vec<_>>()
            .join(", ");

        let battery = match &self.battery {
            Some(b) => format!(
                "battery {:.0}% ({}, wear {})",
                b.percent,
                b.power_label(),
                b.wear
            ),
            None => "no battery detected".to_string(),
        };

        format!(
            "Status: CPU {:.1}%, {ram}, disks [{disks}], latency {}, IP {}, {battery}",
            self.resources.cpu_percent, self.network.latency, self.network.public_ip
        )
    }
}
