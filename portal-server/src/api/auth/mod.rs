//! Authentication routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/auth/login | POST | none |
//! | /api/auth/me | GET | token |
//! | /api/auth/logout | POST | token |

pub mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::PortalState;

pub fn router() -> Router<PortalState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
