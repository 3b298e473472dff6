//! HR Portal Server - demo backend for the employee self-service portal
//!
//! # Overview
//!
//! A single-process REST backend with in-memory storage, seeded with a demo
//! dataset at startup:
//!
//! - **Authentication** (`auth`): JWT + Argon2 login, role guards
//! - **Visibility policy** (`policy`): role-scoped record filtering
//! - **Stores** (`store`): DashMap-backed employee, payroll and review data
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module structure
//!
//! ```text
//! portal-server/src/
//! ├── core/          # configuration, state, server
//! ├── auth/          # JWT authentication, role guards
//! ├── policy/        # record visibility rules
//! ├── store/         # in-memory stores and seed data
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod policy;
pub mod store;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, PortalState, Server, build_app};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: load `.env` and initialize logging
///
/// When `LOG_DIR` points at an existing directory, logs roll daily into a
/// file there instead of stderr.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     ____             __        __
   / / / / __ \   / __ \____  _____/ /_____ _/ /
  / /_/ / /_/ /  / /_/ / __ \/ ___/ __/ __ `/ /
 / __  / _, _/  / ____/ /_/ / /  / /_/ /_/ / /
/_/ /_/_/ |_|  /_/    \____/_/   \__/\__,_/_/
    "#
    );
}
