//! In-memory stores
//!
//! Keyed collections backed by [`dashmap::DashMap`] with atomic id
//! sequences. This is the whole persistence story of the demo portal: seeded
//! at startup, gone at shutdown. Handlers never touch the maps directly;
//! they go through these repository types so the storage can be swapped out
//! without rewriting request handling.

pub mod account;
pub mod employee;
pub mod payroll;
pub mod performance;
pub mod seed;

pub use account::{Account, AccountStore};
pub use employee::EmployeeStore;
pub use payroll::PayrollStore;
pub use performance::ReviewStore;
