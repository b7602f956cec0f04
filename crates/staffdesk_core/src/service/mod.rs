//! Per-entity use-case services over the generic record store.
//!
//! # Responsibility
//! - Present entity-specific method names (create/get/get_all/update/delete)
//!   and the portal's workflow helpers over the uniform store operations.
//! - Keep callers decoupled from store internals and persistence strategy.
//!
//! # Invariants
//! - Writer services borrow the store mutably for their lifetime; the
//!   read-only dashboard borrows it shared.
//! - "Not found" stays `None`/`false` at this layer; only persistence
//!   failures are errors.

pub mod dashboard_service;
pub mod employee_service;
pub mod leave_service;
pub mod payroll_service;
pub mod security_service;
pub mod training_service;
pub mod user_service;
