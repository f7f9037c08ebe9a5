use crate::domain::entities::battery::BatteryReading;

pub trait BatteryProbe: Send + Sync {
    /// Read the primary battery, or `None` when no battery is present
    /// or the sensor cannot be queried.
    fn read(&self) -> Option<BatteryReading>;
}
