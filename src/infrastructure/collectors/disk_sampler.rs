use std::sync::Mutex;

use sysinfo::Disks;

use super::sysinfo_sampler::safe_percent;
use crate::domain::entities::resources::DiskUsage;
use crate::domain::ports::sampler::SampleError;

/// Filesystem types to exclude from disk metrics.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "tmpfs",
    "devtmpfs",
    "sysfs",
    "proc",
    "cgroup2",
    "overlay",
    "squashfs",
    "efivarfs",
    "bpf",
    "hugetlbfs",
    "mqueue",
    "pstore",
    "securityfs",
    "debugfs",
    "tracefs",
    "fusectl",
    "rpc_pipefs",
];

/// Network filesystems to exclude: their capacity belongs to a remote
/// host, and an unreachable mount can stall the statfs call.
const NETWORK_FILESYSTEMS: &[&str] = &["nfs", "nfs4", "cifs", "smbfs", "sshfs", "fuse.sshfs", "9p"];

/// Whether a volume counts as fixed local storage worth alerting on.
fn is_local_volume(filesystem: &str, removable: bool, total_bytes: u64) -> bool {
    !removable
        && total_bytes > 0
        && !PSEUDO_FILESYSTEMS.iter().any(|&fs| filesystem == fs)
        && !NETWORK_FILESYSTEMS.iter().any(|&fs| filesystem == fs)
}

/// Samples per-volume disk usage using the `sysinfo` crate.
///
/// Filters out pseudo-filesystems, network mounts, removable media, and
/// zero-size entries, keeping only fixed local partitions.
pub struct DiskSampler {
    disks: Mutex<Disks>,
}

impl DiskSampler {
    /// Creates a new sampler with a pre-refreshed disk list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            disks: Mutex::new(Disks::new_with_refreshed_list()),
        }
    }

    /// Usage of every fixed local volume.
    ///
    /// Refreshes the disk list to pick up newly mounted/unmounted volumes,
    /// then filters down to fixed local storage.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::MetricsUnavailable` if the internal mutex is poisoned.
    pub fn collect(&self) -> Result<Vec<DiskUsage>, SampleError> {
        let mut disks = self
            .disks
            .lock()
            .map_err(|e| SampleError::MetricsUnavailable(format!("disk lock poisoned: {e}")))?;
        disks.refresh();

        Ok(disks
            .iter()
            .filter(|d| {
                is_local_volume(
                    &d.file_system().to_string_lossy(),
                    d.is_removable(),
                    d.total_space(),
                )
            })
            .map(|disk| {
                let total = disk.total_space();
                let used = total.saturating_sub(disk.available_space());
                DiskUsage {
                    mount_point: disk.mount_point().to_string_lossy().to_string(),
                    used_percent: safe_percent(used, total).clamp(0.0, 100.0),
                }
            })
            .collect())
    }
}

impl Default for DiskSampler {
    fn default() -> Self {
        Self::new()
    }
}
