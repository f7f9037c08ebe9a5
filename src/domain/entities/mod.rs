pub mod alert;
pub mod battery;
pub mod network;
pub mod report;
pub mod resources;
pub mod state;

pub use alert::Alert;
pub use battery::{BatteryReading, WearLevel};
pub use network::{Latency, NetworkReport, PublicIp};
pub use report::CycleReport;
pub use resources::{DiskUsage, ResourceUsage};
pub use state::PersistedState;
