use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::error;

use crate::domain::entities::state::PersistedState;
use crate::domain::ports::store::StateStore;
use crate::domain::value_objects::AlertKey;

/// Cooldown throttle for notifications.
///
/// Each alert key is granted at most once per cooldown window. Grants
/// are written to the persisted state so the window survives process
/// restarts.
pub struct NotificationGate<'a> {
    store: &'a dyn StateStore,
    cooldown: Duration,
}

impl<'a> NotificationGate<'a> {
    #[must_use]
    pub fn new(store: &'a dyn StateStore, cooldown: Duration) -> Self {
        Self { store, cooldown }
    }

    /// Decide whether an alert for `key` may fire at `now`.
    ///
    /// Grants when the key has never fired or when more than the
    /// cooldown has elapsed since its recorded grant. A grant is
    /// recorded in `state` and persisted before returning; a persist
    /// failure is logged but does not revoke the grant, so after a
    /// crash an alert may repeat once rather than be lost.
    pub fn permit(&self, state: &mut PersistedState, key: &AlertKey, now: DateTime<Utc>) -> bool {
        if state
            .seconds_since_fired(key, now)
            .is_some_and(|elapsed| elapsed <= self.cooldown.as_secs_f64())
        {
            return false;
        }
        state.record_fired(key, now);
        if let Err(err) = self.store.save(state) {
            error!("Failed to persist notification state: {err}");
        }
        true
    }
}
