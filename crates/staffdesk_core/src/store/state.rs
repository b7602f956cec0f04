//! Full persisted state: one named table per entity type.
//!
//! # Responsibility
//! - Define the single JSON document shape the store persists and loads.
//! - Bind each entity type to its table slot for generic store operations.
//!
//! # Invariants
//! - Top-level keys are camelCase array names; tables serialize as plain
//!   arrays, so the document stays readable and diffable.
//! - Absent arrays deserialize as empty tables, so adding an entity type is
//!   a backward-compatible change for existing documents.

use crate::model::employee::Employee;
use crate::model::leave::LeaveRequest;
use crate::model::payroll::Payslip;
use crate::model::record::{Record, RecordId};
use crate::model::security::{BackupCode, TrustedDevice, TwoFactorMethod};
use crate::model::training::{EmployeeTraining, TrainingCourse};
use crate::model::user::User;
use crate::store::table::Table;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The whole object graph held in memory and mirrored to storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreState {
    pub users: Table<User>,
    pub employees: Table<Employee>,
    pub training_courses: Table<TrainingCourse>,
    pub employee_trainings: Table<EmployeeTraining>,
    pub leave_requests: Table<LeaveRequest>,
    pub payslips: Table<Payslip>,
    pub two_factor_methods: Table<TwoFactorMethod>,
    pub backup_codes: Table<BackupCode>,
    pub trusted_devices: Table<TrustedDevice>,
}

impl StoreState {
    /// Largest record id across every table; seeds the id allocator.
    pub fn max_record_id(&self) -> RecordId {
        [
            self.users.max_id(),
            self.employees.max_id(),
            self.training_courses.max_id(),
            self.employee_trainings.max_id(),
            self.leave_requests.max_id(),
            self.payslips.max_id(),
            self.two_factor_methods.max_id(),
            self.backup_codes.max_id(),
            self.trusted_devices.max_id(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Total record count across every table.
    pub fn record_count(&self) -> usize {
        self.users.len()
            + self.employees.len()
            + self.training_courses.len()
            + self.employee_trainings.len()
            + self.leave_requests.len()
            + self.payslips.len()
            + self.two_factor_methods.len()
            + self.backup_codes.len()
            + self.trusted_devices.len()
    }
}

/// Binds an entity type to its table slot inside [`StoreState`].
///
/// Store operations are generic over this trait, so per-entity facade code
/// never touches the state struct directly.
pub trait Entity: Record + Serialize + DeserializeOwned + Sized {
    fn table(state: &StoreState) -> &Table<Self>;
    fn table_mut(state: &mut StoreState) -> &mut Table<Self>;
}

macro_rules! entity_table {
    ($ty:ty => $slot:ident) => {
        impl Entity for $ty {
            fn table(state: &StoreState) -> &Table<Self> {
                &state.$slot
            }

            fn table_mut(state: &mut StoreState) -> &mut Table<Self> {
                &mut state.$slot
            }
        }
    };
}

entity_table!(User => users);
entity_table!(Employee => employees);
entity_table!(TrainingCourse => training_courses);
entity_table!(EmployeeTraining => employee_trainings);
entity_table!(LeaveRequest => leave_requests);
entity_table!(Payslip => payslips);
entity_table!(TwoFactorMethod => two_factor_methods);
entity_table!(BackupCode => backup_codes);
entity_table!(TrustedDevice => trusted_devices);
