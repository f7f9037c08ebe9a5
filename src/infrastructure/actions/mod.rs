pub mod working_set;

pub use working_set::WorkingSetReclaimer;
