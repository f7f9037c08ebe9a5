use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::alert_key::AlertKey;

/// Fractional seconds since the Unix epoch, matching the on-disk
/// timestamp format of the notification map.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

/// Durable record carried between cycles: per-alert-key last-fired
/// timestamps and the last confirmed public IP.
///
/// Unknown or missing fields fall back to the defaults, so a state file
/// written by an older build still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub notifications: HashMap<String, f64>,
    pub last_ip: String,
}

impl PersistedState {
    /// Baseline value meaning "no public IP recorded yet".
    pub const UNKNOWN_IP: &'static str = "Unknown";

    /// Elapsed seconds since `key` last fired, or `None` if it never did.
    #[must_use]
    pub fn seconds_since_fired(&self, key: &AlertKey, now: DateTime<Utc>) -> Option<f64> {
        self.notifications
            .get(&key.to_string())
            .map(|last| epoch_seconds(now) - last)
    }

    pub fn record_fired(&mut self, key: &AlertKey, at: DateTime<Utc>) {
        self.notifications.insert(key.to_string(), epoch_seconds(at));
    }

    /// Whether a real public IP has ever been recorded.
    #[must_use]
    pub fn has_ip_baseline(&self) -> bool {
        self.last_ip != Self::UNKNOWN_IP
    }
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            notifications: HashMap::new(),
            last_ip: Self::UNKNOWN_IP.to_string(),
        }
    }
}
