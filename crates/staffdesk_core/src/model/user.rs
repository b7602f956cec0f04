//! Portal user account model.
//!
//! # Responsibility
//! - Define the account record used for sign-in and role checks.
//!
//! # Invariants
//! - `email` is the sign-in handle; uniqueness is not enforced by the store.
//! - `role` decides which portal modules a session may reach.

use crate::model::record::record_impl;
use crate::model::record::RecordId;
use serde::{Deserialize, Serialize};

/// Portal-wide authorization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Team-scoped management access (approvals, reports).
    Manager,
    /// Self-service access only.
    Employee,
}

/// Account lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Suspended,
}

/// Portal user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// RFC 3339 instant of the most recent successful sign-in.
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(User, "users");
