//! Domain models
//!
//! - [`Role`] - RBAC role enum
//! - [`EmployeeRecord`] - employee directory record
//! - [`PayrollEntry`] - monthly payroll entry
//! - [`PerformanceReview`] - performance review record

pub mod employee;
pub mod payroll;
pub mod performance;
pub mod role;

pub use employee::{EmployeeCreate, EmployeeRecord, EmployeeStatus, EmployeeUpdate};
pub use payroll::{PayrollEntry, PayrollPayload, PayrollRow};
pub use performance::{PerformanceReview, ReviewPayload};
pub use role::Role;
