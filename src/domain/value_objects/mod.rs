pub mod alert_key;
pub mod thresholds;

pub use alert_key::AlertKey;
pub use thresholds::ThresholdSet;
