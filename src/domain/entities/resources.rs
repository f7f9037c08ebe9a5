use serde::{Deserialize, Serialize};

/// Utilization of one mounted volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub mount_point: String,
    pub used_percent: f64,
}

/// Point-in-time CPU, memory, and per-volume disk utilization.
///
/// CPU is averaged over logical cores for one short measurement window;
/// RAM is used over total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub cpu_percent: f32,
    pub ram_percent: f64,
    pub disks: Vec<DiskUsage>,
}
