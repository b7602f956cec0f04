//! Employee directory use-case service.
//!
//! # Responsibility
//! - Provide employee-specific CRUD entry points over the generic store.
//! - Resolve employees by business code as well as record id.
//!
//! # Invariants
//! - Service APIs never bypass the store's persist-per-mutation contract.
//! - Unset patch fields leave the stored record untouched.

use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::record::RecordId;
use crate::store::backend::StorageBackend;
use crate::store::query::TextFilter;
use crate::store::{RecordStore, StoreResult};

/// Request model for hiring one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    /// Business code, e.g. `EMP100`. Uniqueness is not enforced.
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    /// Hire date as `YYYY-MM-DD`.
    pub hired_on: String,
}

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeUpdate {
    fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
    }
}

/// Directory listing filter; set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    pub status: Option<EmployeeStatus>,
    pub department: Option<TextFilter>,
    pub name: Option<TextFilter>,
}

impl EmployeeQuery {
    pub fn matches(&self, employee: &Employee) -> bool {
        self.status.map_or(true, |status| employee.status == status)
            && self
                .department
                .as_ref()
                .map_or(true, |filter| filter.matches(&employee.department))
            && self
                .name
                .as_ref()
                .map_or(true, |filter| filter.matches(&employee.name))
    }
}

/// Employee facade over the record store.
pub struct EmployeeService<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> EmployeeService<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    /// Creates one employee record with status `active`.
    pub fn create_employee(&mut self, input: NewEmployee) -> StoreResult<Employee> {
        self.store.create(Employee {
            id: 0,
            employee_id: input.employee_id,
            name: input.name,
            email: input.email,
            department: input.department,
            position: input.position,
            salary: input.salary,
            status: EmployeeStatus::Active,
            hired_on: input.hired_on,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_employee(&self, id: RecordId) -> Option<Employee> {
        self.store.get::<Employee>(id).cloned()
    }

    /// First employee carrying the given business code.
    pub fn get_by_employee_id(&self, employee_id: &str) -> Option<Employee> {
        self.store
            .list::<Employee>()
            .iter()
            .find(|employee| employee.employee_id == employee_id)
            .cloned()
    }

    /// Employees matching the query, insertion order.
    pub fn get_all_employees(&self, query: &EmployeeQuery) -> Vec<Employee> {
        self.store.select(|employee| query.matches(employee))
    }

    pub fn update_employee(
        &mut self,
        id: RecordId,
        patch: EmployeeUpdate,
    ) -> StoreResult<Option<Employee>> {
        self.store.update_with(id, |employee| patch.apply(employee))
    }

    pub fn delete_employee(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<Employee>(id)
    }
}
