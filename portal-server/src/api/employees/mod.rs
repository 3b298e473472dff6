//! Employee directory routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/employees | GET | token |
//! | /api/employees/{id} | GET | token |
//! | /api/employees | POST | HR admin |
//! | /api/employees/{id} | PUT | token (role checked in handler) |
//! | /api/employees/{id} | DELETE | HR admin |

pub mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::require_hr_admin;
use crate::core::PortalState;

pub fn router() -> Router<PortalState> {
    let read = Router::new()
        .route("/api/employees", get(handler::list_employees))
        .route("/api/employees/{id}", get(handler::get_employee))
        .route("/api/employees/{id}", put(handler::update_employee));

    let manage = Router::new()
        .route("/api/employees", post(handler::create_employee))
        .route("/api/employees/{id}", delete(handler::deactivate_employee))
        .layer(middleware::from_fn(require_hr_admin));

    read.merge(manage)
}
