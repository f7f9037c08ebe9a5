use serde::{Deserialize, Serialize};

/// Battery capacity degradation relative to design capacity.
///
/// `Unavailable` is a valid reading, not an error: the deep capacity query
/// needs driver support that plenty of hosts lack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WearLevel {
    Percent(f32),
    Unavailable,
}

impl std::fmt::Display for WearLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p:.1}%"),
            Self::Unavailable => write!(f, "N/A"),
        }
    }
}

/// Charge and health of the host battery.
///
/// Absence of a battery is modelled by the caller holding
/// `Option<BatteryReading>`, never by a zeroed reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryReading {
    pub percent: f32,
    pub plugged: bool,
    pub wear: WearLevel,
}

impl BatteryReading {
    /// Power-source label used in log summaries.
    #[must_use]
    pub const fn power_label(&self) -> &'static str {
        if self.plugged {
            "Charging"
        } else {
            "Discharging"
        }
    }
}
