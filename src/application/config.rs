use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
///
/// Unknown keys are rejected at parse time so a typo in the config file
/// surfaces as a startup error instead of silently falling back to a
/// default value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Alert thresholds for resource checks, in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    #[serde(default = "default_cpu_percent")]
    pub cpu_percent: f64,
    #[serde(default = "default_ram_percent")]
    pub ram_percent: f64,
    #[serde(default = "default_disk_percent")]
    pub disk_percent: f64,
    #[serde(default = "default_battery_low_percent")]
    pub battery_low_percent: f64,
}

/// Network probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Notification throttling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfig {
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
}

/// File locations for the log and the persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default = "default_log_path")]
    pub log_path: String,
    #[serde(default = "default_state_path")]
    pub state_path: String,
}

// --- Defaults ---

const fn default_cpu_percent() -> f64 {
    90.0
}

const fn default_ram_percent() -> f64 {
    90.0
}

const fn default_disk_percent() -> f64 {
    90.0
}

const fn default_battery_low_percent() -> f64 {
    25.0
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_cooldown_secs() -> u64 {
    3600
}

// NOTE: Stored as raw strings with tilde, expanded with shellexpand at point of use.
fn default_log_path() -> String {
    "~/.local/share/sentinel/sentinel.log".into()
}

fn default_state_path() -> String {
    "~/.local/share/sentinel/state.json".into()
}

// --- Default impls ---

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu_percent: default_cpu_percent(),
            ram_percent: default_ram_percent(),
            disk_percent: default_disk_percent(),
            battery_low_percent: default_battery_low_percent(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: default_cooldown_secs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            state_path: default_state_path(),
        }
    }
}

// --- Accessors ---

impl NetworkConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl NotificationConfig {
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

impl StorageConfig {
    #[must_use]
    pub fn expanded_log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_path).into_owned())
    }

    #[must_use]
    pub fn expanded_state_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.state_path).into_owned())
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to default path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("sentinel").join("config.toml"))
    }
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        // Clamp percentages to valid range
        Self {
            cpu_percent: config.cpu_percent.clamp(0.0, 100.0),
            ram_percent: config.ram_percent.clamp(0.0, 100.0),
            disk_percent: config.disk_percent.clamp(0.0, 100.0),
            battery_low_percent: config.battery_low_percent.clamp(0.0, 100.0),
        }
    }
}
