/// Stable identifier for an alert class, independent of message content.
///
/// The `Display` form is the wire string indexing the persisted
/// notification map, so it must never change between releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertKey {
    CpuHigh,
    RamHigh,
    DiskLow(String),
    BatteryLow,
    NetworkChange,
}

impl std::fmt::Display for AlertKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CpuHigh => write!(f, "cpu_high"),
            Self::RamHigh => write!(f, "ram_high"),
            Self::DiskLow(mount) => write!(f, "disk_low_{mount}"),
            Self::BatteryLow => write!(f, "battery_low"),
            Self::NetworkChange => write!(f, "network_change"),
        }
    }
}
