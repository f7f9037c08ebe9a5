use thiserror::Error;

use crate::domain::entities::state::PersistedState;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

pub trait StateStore: Send + Sync {
    /// Load the persisted state, falling back to defaults when no state
    /// exists yet or the stored copy cannot be decoded.
    fn load(&self) -> PersistedState;

    /// Persist the state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn save(&self, state: &PersistedState) -> Result<(), StoreError>;
}
