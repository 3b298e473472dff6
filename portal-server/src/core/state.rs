//! Shared server state

use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::store::{AccountStore, EmployeeStore, PayrollStore, ReviewStore, seed};

/// Server state - shared handles to every service and store
///
/// Cloned per request; all fields are cheap `Arc` copies.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | immutable configuration |
/// | accounts | login credentials and role directory |
/// | employees | employee records |
/// | payroll | payroll entries |
/// | reviews | performance reviews |
/// | jwt_service | token generation/validation |
#[derive(Clone)]
pub struct PortalState {
    pub config: Config,
    pub accounts: Arc<AccountStore>,
    pub employees: Arc<EmployeeStore>,
    pub payroll: Arc<PayrollStore>,
    pub reviews: Arc<ReviewStore>,
    pub jwt_service: Arc<JwtService>,
}

impl PortalState {
    /// Initialize state with empty stores (no seed data)
    pub fn new(config: Config) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            accounts: Arc::new(AccountStore::new()),
            employees: Arc::new(EmployeeStore::new()),
            payroll: Arc::new(PayrollStore::new()),
            reviews: Arc::new(ReviewStore::new()),
            jwt_service,
        }
    }

    /// Initialize state and load the demo seed dataset
    ///
    /// # Panics
    ///
    /// Panics if seeding fails (argon2 hashing error); there is no useful
    /// degraded mode without the seed accounts.
    pub fn initialize(config: &Config) -> Self {
        let state = Self::new(config.clone());
        seed::seed_demo_data(
            &state.accounts,
            &state.employees,
            &state.payroll,
            &state.reviews,
        )
        .expect("Failed to seed demo data");
        state
    }

    /// JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
