//! Record store: in-memory entity tables mirrored to durable storage.
//!
//! # Responsibility
//! - Hold one ordered collection per entity type as the only read/write
//!   path to durable state.
//! - Mirror the full state to the storage backend after every mutation.
//!
//! # Invariants
//! - "Not found" is reported as `None`/`false`, never as an error.
//! - Persistence failures surface to the caller as `Err(StoreError)`; the
//!   in-memory mutation is kept, and the divergence is the caller's to
//!   resolve.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod backend;
pub mod query;
pub mod record_store;
pub mod state;
pub mod table;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use record_store::RecordStore;
pub use state::{Entity, StoreState};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by storage backends and store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing the backing document.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The in-memory state could not be serialized.
    Serialize(serde_json::Error),
    /// The backing document exists but does not parse as a store state.
    Corrupt { path: PathBuf, detail: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "store io failure at `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "store state serialization failed: {err}"),
            Self::Corrupt { path, detail } => {
                write!(f, "store document `{}` is corrupt: {detail}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::Corrupt { .. } => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
