use std::sync::{Mutex, PoisonError};

use crate::domain::entities::state::PersistedState;
use crate::domain::ports::store::{StateStore, StoreError};

/// In-memory store for testing purposes.
///
/// Holds one `PersistedState` behind a mutex. A poisoned lock falls
/// through to the inner value; the state is plain data and stays
/// usable after a panicking writer.
pub struct InMemoryStore {
    state: Mutex<PersistedState>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(PersistedState::default())
    }

    #[must_use]
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Snapshot of the stored state.
    #[must_use]
    pub fn current(&self) -> PersistedState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> PersistedState {
        self.current()
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state.clone();
        Ok(())
    }
}
