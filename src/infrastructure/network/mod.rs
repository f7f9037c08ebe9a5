pub mod probe;

pub use probe::OnlineProbe;
