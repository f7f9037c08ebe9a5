pub mod battery;
pub mod notifier;
pub mod probe;
pub mod ranker;
pub mod reclaimer;
pub mod sampler;
pub mod store;

pub use battery::BatteryProbe;
pub use notifier::{NotificationError, Notifier};
pub use probe::NetworkProbe;
pub use ranker::{ProcessRanker, RankMetric};
pub use reclaimer::MemoryReclaimer;
pub use sampler::{ResourceSampler, SampleError};
pub use store::{StateStore, StoreError};
