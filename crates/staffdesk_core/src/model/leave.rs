//! Leave request model.
//!
//! # Responsibility
//! - Define the leave request record and its decision metadata.
//!
//! # Invariants
//! - A request is created `pending`; approve/reject stamp the decision
//!   fields and never clear them afterwards.
//! - `days` is the requested span in working days; half days are allowed.

use crate::model::record::record_impl;
use crate::model::record::RecordId;
use serde::{Deserialize, Serialize};

/// Leave category, keyed against the fixed allotment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
}

/// Request workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

/// One leave request raised by (or on behalf of) an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub leave_type: LeaveType,
    /// Inclusive range as plain `YYYY-MM-DD` strings.
    pub start_date: String,
    pub end_date: String,
    pub days: f64,
    pub reason: String,
    pub status: LeaveStatus,
    /// User id of the deciding manager, once decided.
    pub approved_by: Option<RecordId>,
    pub decided_at: Option<String>,
    /// Free-form note attached to a rejection.
    pub decision_note: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(LeaveRequest, "leave_requests");
