//! Read-only dashboard aggregates.
//!
//! # Responsibility
//! - Count records by status across entities for the portal landing page.
//!
//! # Invariants
//! - Pure reads over the current in-memory state; nothing is persisted.
//! - Counts reflect the state at call time; there is no snapshot isolation
//!   (the store is single-threaded by construction).

use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::leave::{LeaveRequest, LeaveStatus};
use crate::model::training::{EmployeeTraining, TrainingStatus};
use crate::model::user::{User, UserStatus};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Landing-page counters, recomputed on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub active_employees: usize,
    pub on_leave_employees: usize,
    pub active_users: usize,
    pub pending_leave_requests: usize,
    pub approved_leave_requests: usize,
    pub rejected_leave_requests: usize,
    pub trainings_in_progress: usize,
}

/// Dashboard facade; read-only, so it borrows the store shared.
pub struct DashboardService<'a, B: StorageBackend> {
    store: &'a RecordStore<B>,
}

impl<'a, B: StorageBackend> DashboardService<'a, B> {
    pub fn new(store: &'a RecordStore<B>) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> DashboardSummary {
        let employees = self.store.list::<Employee>();
        let leave_requests = self.store.list::<LeaveRequest>();

        DashboardSummary {
            total_employees: employees.len(),
            active_employees: count_employees(employees, EmployeeStatus::Active),
            on_leave_employees: count_employees(employees, EmployeeStatus::OnLeave),
            active_users: self
                .store
                .list::<User>()
                .iter()
                .filter(|user| user.status == UserStatus::Active)
                .count(),
            pending_leave_requests: count_leave(leave_requests, LeaveStatus::Pending),
            approved_leave_requests: count_leave(leave_requests, LeaveStatus::Approved),
            rejected_leave_requests: count_leave(leave_requests, LeaveStatus::Rejected),
            trainings_in_progress: self
                .store
                .list::<EmployeeTraining>()
                .iter()
                .filter(|enrollment| enrollment.status == TrainingStatus::InProgress)
                .count(),
        }
    }
}

fn count_employees(employees: &[Employee], status: EmployeeStatus) -> usize {
    employees
        .iter()
        .filter(|employee| employee.status == status)
        .count()
}

fn count_leave(requests: &[LeaveRequest], status: LeaveStatus) -> usize {
    requests
        .iter()
        .filter(|request| request.status == status)
        .count()
}
