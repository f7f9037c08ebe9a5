use crate::domain::value_objects::alert_key::AlertKey;

/// A user-facing alert: throttling key plus notification content.
///
/// Construction goes through the per-class helpers so message wording
/// stays in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub key: AlertKey,
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn cpu_high(cpu_percent: f32, top_consumers: &str) -> Self {
        Self {
            key: AlertKey::CpuHigh,
            title: "High CPU Usage".to_string(),
            message: format!(
                "System is under heavy load: {cpu_percent:.1}% usage. Top consumers: {top_consumers}"
            ),
        }
    }

    #[must_use]
    pub fn ram_high(ram_percent: f64, top_consumers: &str) -> Self {
        Self {
            key: AlertKey::RamHigh,
            title: "High Memory Usage".to_string(),
            message: format!(
                "Memory usage at {ram_percent:.1}%. Top consumers: {top_consumers}"
            ),
        }
    }

    #[must_use]
    pub fn disk_low(mount_point: &str, used_percent: f64) -> Self {
        Self {
            key: AlertKey::DiskLow(mount_point.to_string()),
            title: "Low Disk Space".to_string(),
            message: format!("Volume {mount_point} is at {used_percent:.1}% capacity."),
        }
    }

    #[must_use]
    pub fn battery_low(percent: f32) -> Self {
        Self {
            key: AlertKey::BatteryLow,
            title: "Low Battery Warning".to_string(),
            message: format!("Battery is at {percent:.0}%. Please plug in your charger."),
        }
    }

    #[must_use]
    pub fn network_change(previous: &str, current: &str) -> Self {
        Self {
            key: AlertKey::NetworkChange,
            title: "Public IP Changed".to_string(),
            message: format!("Public IP changed from {previous} to {current}."),
        }
    }
}
