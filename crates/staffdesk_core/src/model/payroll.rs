//! Payslip model.

use crate::model::record::record_impl;
use crate::model::record::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    Draft,
    Issued,
    Paid,
}

/// One payroll period statement for one employee.
///
/// `net_pay` is derived (`gross_pay - deductions`) at issue time and stored
/// denormalized, matching what the portal displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub id: RecordId,
    pub employee_id: RecordId,
    /// Payroll period as `YYYY-MM`.
    pub period: String,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub status: PayslipStatus,
    pub paid_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

record_impl!(Payslip, "payslips");
