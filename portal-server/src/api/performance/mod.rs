//! Performance review routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/employees/me/performance | GET | token |
//! | /api/employees/{id}/performance | GET | token (visibility checked) |
//! | /api/employees/{id}/performance | POST | manager or HR admin |
//! | /api/employees/{id}/performance/{review_id} | PUT | manager or HR admin |

pub mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_reviewer;
use crate::core::PortalState;

pub fn router() -> Router<PortalState> {
    let read = Router::new()
        .route("/api/employees/me/performance", get(handler::my_reviews))
        .route(
            "/api/employees/{id}/performance",
            get(handler::employee_reviews),
        );

    let manage = Router::new()
        .route(
            "/api/employees/{id}/performance",
            post(handler::create_review),
        )
        .route(
            "/api/employees/{id}/performance/{review_id}",
            put(handler::overwrite_review),
        )
        .layer(middleware::from_fn(require_reviewer));

    read.merge(manage)
}
