//! Domain models for the portal's record store.
//!
//! # Responsibility
//! - Define canonical flat records, one module per portal domain.
//! - Keep a single uniform id/timestamp shape across every entity.
//!
//! # Invariants
//! - Every record carries a store-assigned numeric `id` plus RFC 3339
//!   `created_at`/`updated_at` strings.
//! - Cross-entity references are loose `RecordId` fields; nothing enforces
//!   that the referenced record exists.

pub mod employee;
pub mod leave;
pub mod payroll;
pub mod record;
pub mod security;
pub mod training;
pub mod user;
