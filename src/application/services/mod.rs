pub mod cycle;
pub mod gate;

pub use cycle::CycleService;
pub use gate::NotificationGate;
