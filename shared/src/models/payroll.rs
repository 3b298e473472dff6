//! Payroll Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly payroll entry
///
/// `net_pay` is derived (`base_salary + bonus - deductions`) and recomputed on
/// every write; it is never accepted from a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: u64,
    pub employee_id: u64,
    /// Month label, e.g. "2025-11"
    pub month: String,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub net_pay: Decimal,
}

impl PayrollEntry {
    /// Net pay formula shared by create and overwrite paths
    pub fn net_of(base_salary: Decimal, bonus: Decimal, deductions: Decimal) -> Decimal {
        base_salary + bonus - deductions
    }
}

/// Create / overwrite payroll payload
///
/// Used for both POST (create) and PUT (full overwrite); payroll entries have
/// no partial-update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPayload {
    pub month: String,
    pub base_salary: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
}

/// Global payroll listing row (`GET /api/payroll`)
///
/// Employee name and department are joined in from the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRow {
    pub id: u64,
    pub employee_id: u64,
    pub employee_name: String,
    pub department: String,
    pub month: String,
    pub net_pay: Decimal,
}
