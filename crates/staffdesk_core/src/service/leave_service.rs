//! Leave request workflow and balance computation.
//!
//! # Responsibility
//! - Provide leave-request CRUD plus the approve/reject decision helpers.
//! - Compute remaining balances from the fixed per-type allotment table.
//!
//! # Invariants
//! - New requests always start `pending`.
//! - Balances are recomputed from raw approved requests on every call and
//!   never persisted.
//! - Approve/reject overwrite status unconditionally; there is no workflow
//!   state machine guarding the transition.

use crate::model::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::model::record::{now_rfc3339, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::{RecordStore, StoreResult};

/// Fixed yearly allotment per leave type, in working days.
pub const DEFAULT_ALLOTMENTS: [(LeaveType, f64); 3] = [
    (LeaveType::Annual, 25.0),
    (LeaveType::Sick, 15.0),
    (LeaveType::Personal, 5.0),
];

/// Request model for submitting one leave request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaveRequest {
    pub employee_id: RecordId,
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub days: f64,
    pub reason: String,
}

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveRequestUpdate {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub days: Option<f64>,
    pub reason: Option<String>,
    pub status: Option<LeaveStatus>,
}

impl LeaveRequestUpdate {
    fn apply(self, request: &mut LeaveRequest) {
        if let Some(leave_type) = self.leave_type {
            request.leave_type = leave_type;
        }
        if let Some(start_date) = self.start_date {
            request.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            request.end_date = end_date;
        }
        if let Some(days) = self.days {
            request.days = days;
        }
        if let Some(reason) = self.reason {
            request.reason = reason;
        }
        if let Some(status) = self.status {
            request.status = status;
        }
    }
}

/// Request listing filter; set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct LeaveQuery {
    pub employee_id: Option<RecordId>,
    pub leave_type: Option<LeaveType>,
    pub status: Option<LeaveStatus>,
}

impl LeaveQuery {
    pub fn matches(&self, request: &LeaveRequest) -> bool {
        self.employee_id
            .map_or(true, |id| request.employee_id == id)
            && self
                .leave_type
                .map_or(true, |leave_type| request.leave_type == leave_type)
            && self.status.map_or(true, |status| request.status == status)
    }
}

/// Remaining balance for one leave type.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveBalance {
    pub leave_type: LeaveType,
    pub allotted: f64,
    pub used: f64,
    pub remaining: f64,
}

/// Leave workflow facade over the record store.
pub struct LeaveService<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> LeaveService<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    /// Submits one request with status `pending` and no decision metadata.
    pub fn submit_request(&mut self, input: NewLeaveRequest) -> StoreResult<LeaveRequest> {
        self.store.create(LeaveRequest {
            id: 0,
            employee_id: input.employee_id,
            leave_type: input.leave_type,
            start_date: input.start_date,
            end_date: input.end_date,
            days: input.days,
            reason: input.reason,
            status: LeaveStatus::Pending,
            approved_by: None,
            decided_at: None,
            decision_note: None,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_request(&self, id: RecordId) -> Option<LeaveRequest> {
        self.store.get::<LeaveRequest>(id).cloned()
    }

    pub fn get_all_requests(&self, query: &LeaveQuery) -> Vec<LeaveRequest> {
        self.store.select(|request| query.matches(request))
    }

    pub fn update_request(
        &mut self,
        id: RecordId,
        patch: LeaveRequestUpdate,
    ) -> StoreResult<Option<LeaveRequest>> {
        self.store.update_with(id, |request| patch.apply(request))
    }

    pub fn delete_request(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<LeaveRequest>(id)
    }

    /// Approves one request, stamping approver and decision time.
    pub fn approve(
        &mut self,
        id: RecordId,
        approver: RecordId,
    ) -> StoreResult<Option<LeaveRequest>> {
        let now = now_rfc3339();
        self.store.update_with(id, |request: &mut LeaveRequest| {
            request.status = LeaveStatus::Approved;
            request.approved_by = Some(approver);
            request.decided_at = Some(now);
            request.decision_note = None;
        })
    }

    /// Rejects one request, stamping approver, decision time and note.
    pub fn reject(
        &mut self,
        id: RecordId,
        approver: RecordId,
        note: impl Into<String>,
    ) -> StoreResult<Option<LeaveRequest>> {
        let now = now_rfc3339();
        let note = note.into();
        self.store.update_with(id, |request: &mut LeaveRequest| {
            request.status = LeaveStatus::Rejected;
            request.approved_by = Some(approver);
            request.decided_at = Some(now);
            request.decision_note = Some(note);
        })
    }

    /// Remaining balances for one employee, one entry per allotment row.
    ///
    /// Only `approved` requests consume balance; pending, rejected and
    /// cancelled requests are ignored.
    pub fn balances(&self, employee_id: RecordId) -> Vec<LeaveBalance> {
        DEFAULT_ALLOTMENTS
            .iter()
            .map(|&(leave_type, allotted)| {
                let used: f64 = self
                    .store
                    .list::<LeaveRequest>()
                    .iter()
                    .filter(|request| {
                        request.employee_id == employee_id
                            && request.leave_type == leave_type
                            && request.status == LeaveStatus::Approved
                    })
                    .map(|request| request.days)
                    .sum();
                LeaveBalance {
                    leave_type,
                    allotted,
                    used,
                    remaining: allotted - used,
                }
            })
            .collect()
    }
}
