//! Payroll routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/employees/me/payroll | GET | token |
//! | /api/employees/{id}/payroll | GET | token (visibility checked) |
//! | /api/employees/{id}/payroll | POST | HR admin |
//! | /api/employees/{id}/payroll/{payroll_id} | PUT | HR admin |
//! | /api/payroll | GET | token (role-filtered listing) |
//!
//! The static `me` segment must be registered alongside the `{id}` routes;
//! the router picks the static match first.

pub mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_hr_admin;
use crate::core::PortalState;

pub fn router() -> Router<PortalState> {
    let read = Router::new()
        .route("/api/employees/me/payroll", get(handler::my_payroll))
        .route("/api/employees/{id}/payroll", get(handler::employee_payroll))
        .route("/api/payroll", get(handler::global_payroll));

    let manage = Router::new()
        .route("/api/employees/{id}/payroll", post(handler::create_entry))
        .route(
            "/api/employees/{id}/payroll/{payroll_id}",
            put(handler::overwrite_entry),
        )
        .layer(middleware::from_fn(require_hr_admin));

    read.merge(manage)
}
