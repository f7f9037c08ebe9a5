//! Single-shot hardware health sentinel: samples CPU, memory, disks,
//! network reachability and battery, then raises throttled desktop alerts.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
