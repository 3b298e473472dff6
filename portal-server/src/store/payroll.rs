//! Payroll store

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use shared::models::{PayrollEntry, PayrollPayload};

/// Seeded payroll ids start here, matching the demo dataset
const PAYROLL_ID_BASE: u64 = 100;

/// In-memory payroll entries
#[derive(Debug)]
pub struct PayrollStore {
    entries: DashMap<u64, PayrollEntry>,
    seq: AtomicU64,
}

impl Default for PayrollStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PayrollStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            seq: AtomicU64::new(PAYROLL_ID_BASE),
        }
    }

    /// Create a new entry; net pay is derived, never taken from the payload
    pub fn create(&self, employee_id: u64, payload: PayrollPayload) -> PayrollEntry {
        let id = self.seq.fetch_add(1, Ordering::Relaxed);
        let entry = PayrollEntry {
            id,
            employee_id,
            month: payload.month,
            base_salary: payload.base_salary,
            bonus: payload.bonus,
            deductions: payload.deductions,
            net_pay: PayrollEntry::net_of(
                payload.base_salary,
                payload.bonus,
                payload.deductions,
            ),
        };
        self.entries.insert(id, entry.clone());
        entry
    }

    pub fn get(&self, id: u64) -> Option<PayrollEntry> {
        self.entries.get(&id).map(|e| e.clone())
    }

    /// Entries for one employee, month descending
    pub fn list_for_employee(&self, employee_id: u64) -> Vec<PayrollEntry> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .map(|e| e.clone())
            .collect();
        entries.sort_by(|a, b| b.month.cmp(&a.month).then(a.id.cmp(&b.id)));
        entries
    }

    /// Every entry, unordered
    pub fn list_all(&self) -> Vec<PayrollEntry> {
        self.entries.iter().map(|e| e.clone()).collect()
    }

    /// Full-record overwrite; id and owning employee are preserved
    pub fn overwrite(&self, id: u64, payload: PayrollPayload) -> Option<PayrollEntry> {
        let mut entry = self.entries.get_mut(&id)?;
        entry.month = payload.month;
        entry.base_salary = payload.base_salary;
        entry.bonus = payload.bonus;
        entry.deductions = payload.deductions;
        entry.net_pay =
            PayrollEntry::net_of(payload.base_salary, payload.bonus, payload.deductions);
        Some(entry.clone())
    }
}
