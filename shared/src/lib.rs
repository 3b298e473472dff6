//! Shared types for the HR portal
//!
//! Common types used by the server and any API client: domain models,
//! request/response DTOs.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    EmployeeCreate, EmployeeRecord, EmployeeStatus, EmployeeUpdate, PayrollEntry, PayrollPayload,
    PayrollRow, PerformanceReview, ReviewPayload, Role,
};
