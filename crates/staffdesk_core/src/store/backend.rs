//! Pluggable persistence backends for the record store.
//!
//! # Responsibility
//! - Load the persisted state at open and mirror the full state on demand.
//! - Keep the persistence strategy swappable without touching call sites.
//!
//! # Invariants
//! - `load` returns `Ok(None)` for a backend with no prior state; corrupt
//!   state is an error, never silently replaced.
//! - `persist` either lands the complete document or leaves the previous
//!   document intact (write-then-rename for the file backend).

use crate::store::state::StoreState;
use crate::store::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage strategy behind a [`RecordStore`](crate::store::RecordStore).
pub trait StorageBackend {
    /// Reads prior state, or `None` when the backend holds nothing yet.
    fn load(&mut self) -> StoreResult<Option<StoreState>>;

    /// Mirrors the complete state to durable storage.
    fn persist(&mut self, state: &StoreState) -> StoreResult<()>;

    /// Short mode tag used in `mode=` log fields.
    fn mode(&self) -> &'static str;
}

/// Ephemeral backend: nothing is loaded, nothing is written.
///
/// The test and scratch-session backend.
#[derive(Debug, Default)]
pub struct MemoryBackend;

impl MemoryBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&mut self) -> StoreResult<Option<StoreState>> {
        Ok(None)
    }

    fn persist(&mut self, _state: &StoreState) -> StoreResult<()> {
        Ok(())
    }

    fn mode(&self) -> &'static str {
        "memory"
    }
}

/// Single-document JSON file backend.
///
/// The whole state lands as one pretty-printed JSON object of named arrays.
/// Writes go to a `.tmp` sibling first and are renamed over the target, so a
/// crash mid-write cannot truncate the store.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&mut self) -> StoreResult<Option<StoreState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let body =
            fs::read_to_string(&self.path).map_err(|err| Self::io_error(&self.path, err))?;
        let state = serde_json::from_str(&body).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            detail: err.to_string(),
        })?;
        Ok(Some(state))
    }

    fn persist(&mut self, state: &StoreState) -> StoreResult<()> {
        let body = serde_json::to_string_pretty(state)?;
        let staging = self.path.with_extension("tmp");

        fs::write(&staging, body).map_err(|err| Self::io_error(&staging, err))?;
        fs::rename(&staging, &self.path).map_err(|err| Self::io_error(&self.path, err))?;
        Ok(())
    }

    fn mode(&self) -> &'static str {
        "file"
    }
}
