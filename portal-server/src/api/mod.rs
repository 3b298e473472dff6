//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login / me / logout
//! - [`employees`] - employee directory CRUD
//! - [`payroll`] - payroll entries and the global payroll listing
//! - [`performance`] - performance reviews

pub mod auth;
pub mod employees;
pub mod health;
pub mod payroll;
pub mod performance;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
