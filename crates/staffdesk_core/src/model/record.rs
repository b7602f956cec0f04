//! Record identity and lifecycle metadata shared by every entity.
//!
//! # Responsibility
//! - Define the numeric record identifier used across all tables.
//! - Provide uniform access to id and timestamp fields for store code.
//!
//! # Invariants
//! - `id` is assigned exactly once, by the store, at create time.
//! - `created_at` is written once; `updated_at` is refreshed on every write.
//! - Timestamps are RFC 3339 strings in UTC.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Numeric identifier assigned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = u64;

/// Uniform id/timestamp contract implemented by every stored entity.
///
/// Store code only ever touches records through this trait; domain fields
/// stay private to the entity's own module and its callers.
pub trait Record: Clone {
    /// Entity name used in structured log events (`entity=employees`).
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;

    /// Assigns the store-allocated identifier. Called once at create time.
    fn assign_id(&mut self, id: RecordId);

    /// Sets both timestamps to the creation instant.
    fn stamp_created(&mut self, ts: &str);

    /// Refreshes `updated_at` only.
    fn touch(&mut self, ts: &str);

    fn created_at(&self) -> &str;

    fn updated_at(&self) -> &str;
}

/// Implements [`Record`] for an entity struct with the conventional
/// `id`/`created_at`/`updated_at` fields.
macro_rules! record_impl {
    ($ty:ty, $entity:literal) => {
        impl $crate::model::record::Record for $ty {
            const ENTITY: &'static str = $entity;

            fn id(&self) -> $crate::model::record::RecordId {
                self.id
            }

            fn assign_id(&mut self, id: $crate::model::record::RecordId) {
                self.id = id;
            }

            fn stamp_created(&mut self, ts: &str) {
                self.created_at = ts.to_string();
                self.updated_at = ts.to_string();
            }

            fn touch(&mut self, ts: &str) {
                self.updated_at = ts.to_string();
            }

            fn created_at(&self) -> &str {
                &self.created_at
            }

            fn updated_at(&self) -> &str {
                &self.updated_at
            }
        }
    };
}
pub(crate) use record_impl;

/// Returns the current UTC instant as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("current UTC time formats as RFC 3339")
}

#[cfg(test)]
mod tests {
    use super::now_rfc3339;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    #[test]
    fn now_rfc3339_round_trips_through_parser() {
        let stamp = now_rfc3339();
        let parsed = OffsetDateTime::parse(&stamp, &Rfc3339).expect("stamp should parse back");
        assert_eq!(parsed.offset(), time::UtcOffset::UTC);
    }
}
