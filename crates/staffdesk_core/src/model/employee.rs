//! Employee directory model.
//!
//! # Responsibility
//! - Define the HR master record referenced by leave, payroll and training.
//!
//! # Invariants
//! - `employee_id` is the human-facing business code (`EMP100`), distinct
//!   from the store-assigned numeric `id`.
//! - Child records reference employees by numeric `id`; dangling references
//!   are accepted (no referential integrity at the store level).

use crate::model::record::record_impl;
use crate::model::record::RecordId;
use serde::{Deserialize, Serialize};

/// Employment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

/// HR master record for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    /// Business code shown across the portal, e.g. `EMP100`.
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub status: EmployeeStatus,
    /// Hire date as a plain `YYYY-MM-DD` string.
    pub hired_on: String,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(Employee, "employees");
