//! Store lifecycle and the uniform per-entity operations.
//!
//! # Responsibility
//! - Open a store over a storage backend and keep memory and storage in step.
//! - Provide the generic create/get/list/update/delete path every facade
//!   method routes through.
//!
//! # Invariants
//! - Record ids come from a monotonic counter seeded past the largest
//!   persisted id, so ids never repeat within or across store lifetimes.
//! - Every mutating call mirrors the complete state to the backend before
//!   returning; there is no batching.
//! - The store is an explicitly constructed value, not a process-wide
//!   singleton; tests open as many as they like.

use crate::model::record::{now_rfc3339, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::state::{Entity, StoreState};
use crate::store::StoreResult;
use log::{debug, error, info};
use std::time::Instant;

/// In-memory entity tables mirrored to a storage backend.
#[derive(Debug)]
pub struct RecordStore<B: StorageBackend> {
    state: StoreState,
    backend: B,
    next_id: RecordId,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Opens a store, loading prior state from the backend when present.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and record count.
    pub fn open(mut backend: B) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!(
            "event=store_open module=store status=start mode={}",
            backend.mode()
        );

        let state = match backend.load() {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode={} duration_ms={} error={}",
                    backend.mode(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        let next_id = state.max_record_id() + 1;
        info!(
            "event=store_open module=store status=ok mode={} duration_ms={} records={}",
            backend.mode(),
            started_at.elapsed().as_millis(),
            state.record_count()
        );

        Ok(Self {
            state,
            backend,
            next_id,
        })
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Assigns identifier and timestamps, appends, persists, and returns the
    /// stored record.
    ///
    /// Domain fields are taken as given: duplicates and dangling references
    /// are accepted silently.
    pub fn create<T: Entity>(&mut self, mut record: T) -> StoreResult<T> {
        let id = self.allocate_id();
        record.assign_id(id);
        record.stamp_created(&now_rfc3339());

        T::table_mut(&mut self.state).insert(record.clone());
        self.persist()?;

        debug!(
            "event=record_create module=store entity={} id={id}",
            T::ENTITY
        );
        Ok(record)
    }

    /// First record with the given id, or `None`.
    pub fn get<T: Entity>(&self, id: RecordId) -> Option<&T> {
        T::table(&self.state).get(id)
    }

    /// All records of one entity, insertion order.
    pub fn list<T: Entity>(&self) -> &[T] {
        T::table(&self.state).rows()
    }

    /// Records matching the predicate, cloned, insertion order preserved.
    pub fn select<T: Entity>(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        T::table(&self.state)
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// Applies a patch closure to the record with the given id, refreshes
    /// `updated_at`, persists, and returns the updated record.
    ///
    /// Returns `Ok(None)` when no record matches; the backend is not touched
    /// in that case.
    pub fn update_with<T: Entity>(
        &mut self,
        id: RecordId,
        apply: impl FnOnce(&mut T),
    ) -> StoreResult<Option<T>> {
        let now = now_rfc3339();
        let updated = match T::table_mut(&mut self.state).get_mut(id) {
            Some(record) => {
                apply(record);
                record.touch(&now);
                record.clone()
            }
            None => return Ok(None),
        };

        self.persist()?;
        debug!(
            "event=record_update module=store entity={} id={id}",
            T::ENTITY
        );
        Ok(Some(updated))
    }

    /// Splices out the record with the given id and persists.
    ///
    /// Returns `Ok(false)` when no record matches; the backend is not
    /// touched in that case.
    pub fn delete<T: Entity>(&mut self, id: RecordId) -> StoreResult<bool> {
        if !T::table_mut(&mut self.state).remove(id) {
            return Ok(false);
        }

        self.persist()?;
        debug!(
            "event=record_delete module=store entity={} id={id}",
            T::ENTITY
        );
        Ok(true)
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Mirrors the complete in-memory state to the backend.
    ///
    /// An O(total records) cost paid on every single-record write; the
    /// backing document stays a consistent full snapshot at all times.
    fn persist(&mut self) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.backend.persist(&self.state) {
            Ok(()) => {
                debug!(
                    "event=store_persist module=store status=ok mode={} duration_ms={} records={}",
                    self.backend.mode(),
                    started_at.elapsed().as_millis(),
                    self.state.record_count()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error mode={} duration_ms={} error={}",
                    self.backend.mode(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
