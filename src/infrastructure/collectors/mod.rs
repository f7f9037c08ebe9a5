pub mod battery_sampler;
pub mod disk_sampler;
pub mod process_ranker;
pub mod sysinfo_sampler;

pub use battery_sampler::BatterySampler;
pub use disk_sampler::DiskSampler;
pub use process_ranker::SysinfoRanker;
pub use sysinfo_sampler::SysinfoSampler;
