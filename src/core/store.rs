//! Durable storage for the board document

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::document;
use crate::core::models::RootState;
use crate::{debug, warn};

/// File name of the persisted board; carries the storage key of the
/// original web version so saved documents stay recognizable.
pub const STORE_FILE: &str = "malla_interactiva_v1.json";

/// File-backed persistence for the root state
///
/// The store holds a single document that is replaced wholesale on every
/// save; there is no incremental writing.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store over an explicit file path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store inside the configured data directory
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(PathBuf::from(&config.paths.data_dir).join(STORE_FILE))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved board, if any
    ///
    /// A missing file, an unreadable file, and undecodable contents all
    /// read as "no saved board"; corruption is never surfaced as an
    /// error.
    #[must_use]
    pub fn load(&self) -> Option<RootState> {
        if !self.path.exists() {
            debug!("No saved board at {}", self.path.display());
            return None;
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read {}: {e}", self.path.display());
                return None;
            }
        };

        match document::parse(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Ignoring saved board at {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Replace the saved board with `state`
    ///
    /// The document is written to a temporary sibling first and then
    /// moved into place, so a failed save leaves the previous record
    /// intact.
    ///
    /// # Errors
    /// Returns a message when the data directory cannot be created or
    /// the document cannot be written.
    pub fn save(&self, state: &RootState) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }

        let json = document::to_json(state);
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| format!("failed to write {}: {e}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| format!("failed to replace {}: {e}", self.path.display()))?;

        debug!("Board saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::new(dir.path().join(STORE_FILE));
        (dir, store)
    }

    #[test]
    fn test_load_absent_returns_none() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        let state = RootState::default_board();

        store.save(&state).expect("save should succeed");
        let loaded = store.load().expect("saved board should load");
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ this is not json").expect("Failed to write corrupt file");

        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let (_dir, store) = temp_store();
        let mut state = RootState::default_board();
        store.save(&state).expect("first save should succeed");

        state.semesters[0].courses[0].done = true;
        store.save(&state).expect("second save should succeed");

        let loaded = store.load().expect("saved board should load");
        assert!(loaded.semesters[0].courses[0].done);
        // No temp leftovers after a completed save
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::new(dir.path().join("nested").join("deeper").join(STORE_FILE));

        store.save(&RootState::empty()).expect("save should create directories");
        assert!(store.load().is_some());
    }
}
