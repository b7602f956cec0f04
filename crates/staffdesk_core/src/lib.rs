//! Core data layer for the StaffDesk business portal.
//! This crate is the single source of truth for portal records and their
//! persistence.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeStatus};
pub use model::leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use model::payroll::{Payslip, PayslipStatus};
pub use model::record::{Record, RecordId};
pub use model::security::{BackupCode, TrustedDevice, TwoFactorKind, TwoFactorMethod};
pub use model::training::{EmployeeTraining, TrainingCourse, TrainingStatus};
pub use model::user::{User, UserRole, UserStatus};
pub use service::dashboard_service::{DashboardService, DashboardSummary};
pub use service::employee_service::{EmployeeQuery, EmployeeService, EmployeeUpdate, NewEmployee};
pub use service::leave_service::{
    LeaveBalance, LeaveQuery, LeaveRequestUpdate, LeaveService, NewLeaveRequest,
    DEFAULT_ALLOTMENTS,
};
pub use service::payroll_service::{NewPayslip, PayrollService, PayslipQuery, PayslipUpdate};
pub use service::security_service::{NewTrustedDevice, NewTwoFactorMethod, SecurityService};
pub use service::training_service::{
    CourseQuery, CourseUpdate, EnrollmentQuery, EnrollmentUpdate, NewCourse, TrainingService,
};
pub use service::user_service::{NewUser, UserQuery, UserService, UserUpdate};
pub use store::query::TextFilter;
pub use store::{
    Entity, JsonFileBackend, MemoryBackend, RecordStore, StorageBackend, StoreError, StoreResult,
    StoreState,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
