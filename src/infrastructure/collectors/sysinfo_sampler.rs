use std::sync::Mutex;
use std::time::Duration;

use sysinfo::System;

use super::disk_sampler::DiskSampler;
use crate::domain::entities::resources::ResourceUsage;
use crate::domain::ports::sampler::{ResourceSampler, SampleError};

/// Interval between the two CPU refreshes that bracket a measurement.
const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Returns `(numerator / denominator) * 100.0`, or `0.0` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn safe_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        (numerator as f64 / denominator as f64) * 100.0
    } else {
        0.0
    }
}

/// Returns the arithmetic mean of `per_core` usages, or `0.0` when the slice is empty.
#[allow(clippy::cast_precision_loss)]
fn avg_cpu_usage(per_core: &[f32]) -> f32 {
    let count = per_core.len();
    if count > 0 {
        per_core.iter().sum::<f32>() / count as f32
    } else {
        0.0
    }
}

/// Samples CPU, memory, and disk usage using the `sysinfo` crate.
///
/// Uses `Mutex<System>` for interior mutability since the `ResourceSampler`
/// trait requires `&self` but `sysinfo::System` needs `&mut self` for refresh.
/// CPU usage is measured over a one second window: two refreshes bracket a
/// sleep, and the per-core delta between them is averaged.
pub struct SysinfoSampler {
    sys: Mutex<System>,
    disks: DiskSampler,
}

impl SysinfoSampler {
    /// Creates a new sampler with pre-initialized system data.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            disks: DiskSampler::new(),
        }
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSampler for SysinfoSampler {
    fn sample(&self) -> Result<ResourceUsage, SampleError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| SampleError::MetricsUnavailable(format!("system lock poisoned: {e}")))?;

        sys.refresh_cpu_usage();
        std::thread::sleep(CPU_SAMPLE_WINDOW);
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let per_core: Vec<f32> = sys.cpus().iter().map(sysinfo::Cpu::cpu_usage).collect();
        let cpu_percent = avg_cpu_usage(&per_core);
        let ram_percent = safe_percent(sys.used_memory(), sys.total_memory());
        drop(sys);

        let disks = self.disks.collect()?;

        Ok(ResourceUsage {
            cpu_percent,
            ram_percent,
            disks,
        })
    }

    fn ram_percent(&self) -> Result<f64, SampleError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| SampleError::MetricsUnavailable(format!("system lock poisoned: {e}")))?;
        sys.refresh_memory();
        Ok(safe_percent(sys.used_memory(), sys.total_memory()))
    }
}
