//! Ordered record collection for one entity type.
//!
//! # Responsibility
//! - Hold the rows of one entity in insertion order.
//! - Provide the linear-scan primitives the store builds its operations on.
//!
//! # Invariants
//! - Insertion order is preserved across every operation; removal splices,
//!   it never swaps.
//! - Lookups match on record id, first hit wins.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Growable ordered collection backing one entity type.
///
/// Serializes as a bare JSON array so the persisted document stays a plain
/// object of named arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub(crate) fn insert(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Removes the row with the given id. Returns whether a row was removed.
    pub(crate) fn remove(&mut self, id: RecordId) -> bool {
        match self.rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Largest id currently present, or 0 for an empty table.
    pub(crate) fn max_id(&self) -> RecordId {
        self.rows.iter().map(Record::id).max().unwrap_or(0)
    }
}
