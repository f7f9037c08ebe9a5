use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::state::PersistedState;
use crate::domain::ports::store::{StateStore, StoreError};

/// State store backed by a pretty-printed JSON file.
///
/// Reads never fail: a missing file means first run, and an unreadable
/// or corrupt file is logged and replaced by defaults. The cost is one
/// repeated alert window after corruption, never an aborted cycle.
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> PersistedState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No state file at {}, starting fresh", self.path.display());
                return PersistedState::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read state file {}: {e}", self.path.display());
                return PersistedState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    "Corrupt state file {}, starting fresh: {e}",
                    self.path.display()
                );
                PersistedState::default()
            }
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::WriteFailed(format!("create {}: {e}", parent.display()))
            })?;
        }
        let content = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::WriteFailed(format!("serialize state: {e}")))?;
        std::fs::write(&self.path, content)
            .map_err(|e| StoreError::WriteFailed(format!("write {}: {e}", self.path.display())))?;
        Ok(())
    }
}
