pub mod actions;
pub mod collectors;
pub mod logging;
pub mod network;
pub mod notifications;
pub mod persistence;
