//! Pure evaluation rules: measurements and thresholds in, decisions out. No I/O.

pub mod consumers;
pub mod network;

pub use consumers::{format_consumers, rank_consumers, UNKNOWN_CONSUMERS};
pub use network::{evaluate_ip_change, IpChange};
