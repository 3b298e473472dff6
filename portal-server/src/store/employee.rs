//! Employee store

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use shared::models::{EmployeeCreate, EmployeeRecord, EmployeeStatus, EmployeeUpdate};

/// In-memory employee directory
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: DashMap<u64, EmployeeRecord>,
    seq: AtomicU64,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    /// Insert a seeded record, keeping the sequence ahead of seeded ids
    pub fn insert_seeded(&self, record: EmployeeRecord) {
        self.seq.fetch_max(record.id + 1, Ordering::Relaxed);
        self.records.insert(record.id, record);
    }

    /// Create a new employee with the next sequential id
    pub fn create(&self, payload: EmployeeCreate) -> EmployeeRecord {
        let id = self.seq.fetch_add(1, Ordering::Relaxed);
        let record = EmployeeRecord {
            id,
            name: payload.name,
            email: payload.email,
            department: payload.department,
            title: payload.title,
            status: payload.status.unwrap_or(EmployeeStatus::Active),
        };
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: u64) -> Option<EmployeeRecord> {
        self.records.get(&id).map(|r| r.clone())
    }

    pub fn exists(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    /// All records, ascending by id
    pub fn list(&self) -> Vec<EmployeeRecord> {
        let mut records: Vec<_> = self.records.iter().map(|r| r.clone()).collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Partial update: only provided fields overwrite
    pub fn update(&self, id: u64, payload: EmployeeUpdate) -> Option<EmployeeRecord> {
        let mut entry = self.records.get_mut(&id)?;
        if let Some(name) = payload.name {
            entry.name = name;
        }
        if let Some(email) = payload.email {
            entry.email = email;
        }
        if let Some(department) = payload.department {
            entry.department = department;
        }
        if let Some(title) = payload.title {
            entry.title = title;
        }
        if let Some(status) = payload.status {
            entry.status = status;
        }
        Some(entry.clone())
    }

    /// Soft delete: flip status to INACTIVE
    ///
    /// Deactivating an already inactive record succeeds and is a no-op.
    pub fn deactivate(&self, id: u64) -> Option<EmployeeRecord> {
        let mut entry = self.records.get_mut(&id)?;
        entry.status = EmployeeStatus::Inactive;
        Some(entry.clone())
    }
}
