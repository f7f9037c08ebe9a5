use battery::State;

use crate::domain::entities::battery::{BatteryReading, WearLevel};
use crate::domain::ports::battery::BatteryProbe;

/// Wear relative to design capacity, in percent.
///
/// Yields `Unavailable` when either capacity is zero, negative, or not
/// finite, which covers firmware that leaves design values blank.
fn wear_percent(full_wh: f32, design_wh: f32) -> WearLevel {
    if !(full_wh.is_finite() && design_wh.is_finite()) || full_wh <= 0.0 || design_wh <= 0.0 {
        return WearLevel::Unavailable;
    }
    WearLevel::Percent(((1.0 - full_wh / design_wh) * 100.0).clamp(0.0, 100.0))
}

/// Reads the first battery reported by the `battery` crate.
///
/// A fresh manager is constructed per read; the cost is negligible for
/// a once-per-invocation probe. Hosts without a battery, and hosts
/// whose power sensors cannot be enumerated, read as `None`.
pub struct BatterySampler;

impl BatterySampler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BatterySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryProbe for BatterySampler {
    fn read(&self) -> Option<BatteryReading> {
        let manager = match battery::Manager::new() {
            Ok(manager) => manager,
            Err(e) => {
                tracing::debug!("Battery manager unavailable: {e}");
                return None;
            }
        };
        let mut batteries = match manager.batteries() {
            Ok(batteries) => batteries,
            Err(e) => {
                tracing::debug!("Battery enumeration failed: {e}");
                return None;
            }
        };
        let battery = match batteries.next() {
            Some(Ok(battery)) => battery,
            Some(Err(e)) => {
                tracing::debug!("Battery read failed: {e}");
                return None;
            }
            None => return None,
        };

        let percent = battery
            .state_of_charge()
            .get::<battery::units::ratio::percent>();
        let plugged = matches!(battery.state(), State::Charging | State::Full);
        let wear = wear_percent(
            battery
                .energy_full()
                .get::<battery::units::energy::watt_hour>(),
            battery
                .energy_full_design()
                .get::<battery::units::energy::watt_hour>(),
        );

        Some(BatteryReading {
            percent,
            plugged,
            wear,
        })
    }
}
