//! Account directory
//!
//! Login credentials plus the employee-to-role mapping the visibility policy
//! consults. Accounts are created once at seeding and immutable afterwards.

use dashmap::DashMap;

use shared::models::Role;

use crate::policy::RecordOwner;

/// Login account
#[derive(Debug, Clone)]
pub struct Account {
    /// Login identity, stored lowercased
    pub email: String,
    /// argon2 hash of the password
    pub password_hash: String,
    pub display_name: String,
    pub role: Role,
    /// Employee record the account belongs to (0 for the bootstrap admin)
    pub employee_id: u64,
}

impl Account {
    /// Verify a password against the stored argon2 hash
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Account store keyed by lowercased email
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Insert a seeded account
    pub fn insert(&self, account: Account) {
        self.accounts
            .insert(account.email.to_lowercase(), account);
    }

    /// Find an account by email (case-insensitive)
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts.get(&email.to_lowercase()).map(|a| a.clone())
    }

    /// Role of the account linked to an employee, if any
    pub fn role_of(&self, employee_id: u64) -> Option<Role> {
        self.accounts
            .iter()
            .find(|a| a.employee_id == employee_id)
            .map(|a| a.role)
    }

    /// Build the policy-side view of a record owner
    pub fn owner_of(&self, employee_id: u64) -> RecordOwner {
        RecordOwner {
            employee_id,
            role: self.role_of(employee_id),
        }
    }
}
