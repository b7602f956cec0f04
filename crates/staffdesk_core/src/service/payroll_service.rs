//! Payslip use-case service.
//!
//! # Invariants
//! - `net_pay` is computed once at issue time (`gross - deductions`) and
//!   recomputed whenever a patch touches either component.

use crate::model::payroll::{Payslip, PayslipStatus};
use crate::model::record::{now_rfc3339, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::{RecordStore, StoreResult};

/// Request model for issuing one payslip.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayslip {
    pub employee_id: RecordId,
    /// Payroll period as `YYYY-MM`.
    pub period: String,
    pub gross_pay: f64,
    pub deductions: f64,
}

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayslipUpdate {
    pub period: Option<String>,
    pub gross_pay: Option<f64>,
    pub deductions: Option<f64>,
    pub status: Option<PayslipStatus>,
}

impl PayslipUpdate {
    fn apply(self, payslip: &mut Payslip) {
        if let Some(period) = self.period {
            payslip.period = period;
        }
        if let Some(gross_pay) = self.gross_pay {
            payslip.gross_pay = gross_pay;
        }
        if let Some(deductions) = self.deductions {
            payslip.deductions = deductions;
        }
        if let Some(status) = self.status {
            payslip.status = status;
        }
        payslip.net_pay = payslip.gross_pay - payslip.deductions;
    }
}

/// Payslip listing filter; set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct PayslipQuery {
    pub employee_id: Option<RecordId>,
    pub period: Option<String>,
    pub status: Option<PayslipStatus>,
}

impl PayslipQuery {
    pub fn matches(&self, payslip: &Payslip) -> bool {
        self.employee_id
            .map_or(true, |id| payslip.employee_id == id)
            && self
                .period
                .as_ref()
                .map_or(true, |period| &payslip.period == period)
            && self.status.map_or(true, |status| payslip.status == status)
    }
}

/// Payroll facade over the record store.
pub struct PayrollService<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> PayrollService<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    /// Issues one payslip with derived `net_pay` and status `issued`.
    pub fn issue_payslip(&mut self, input: NewPayslip) -> StoreResult<Payslip> {
        let net_pay = input.gross_pay - input.deductions;
        self.store.create(Payslip {
            id: 0,
            employee_id: input.employee_id,
            period: input.period,
            gross_pay: input.gross_pay,
            deductions: input.deductions,
            net_pay,
            status: PayslipStatus::Issued,
            paid_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    pub fn get_payslip(&self, id: RecordId) -> Option<Payslip> {
        self.store.get::<Payslip>(id).cloned()
    }

    pub fn get_all_payslips(&self, query: &PayslipQuery) -> Vec<Payslip> {
        self.store.select(|payslip| query.matches(payslip))
    }

    pub fn update_payslip(
        &mut self,
        id: RecordId,
        patch: PayslipUpdate,
    ) -> StoreResult<Option<Payslip>> {
        self.store.update_with(id, |payslip| patch.apply(payslip))
    }

    pub fn delete_payslip(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.delete::<Payslip>(id)
    }

    /// Marks one payslip paid and stamps the payment instant.
    pub fn mark_paid(&mut self, id: RecordId) -> StoreResult<Option<Payslip>> {
        let now = now_rfc3339();
        self.store.update_with(id, |payslip: &mut Payslip| {
            payslip.status = PayslipStatus::Paid;
            payslip.paid_at = Some(now);
        })
    }
}
