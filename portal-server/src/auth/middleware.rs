//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role guards.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::models::Role;

use crate::auth::{CurrentUser, JwtService};
use crate::core::PortalState;
use crate::utils::AppError;

/// Authentication middleware - requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success the [`CurrentUser`] is injected into request extensions.
///
/// Skipped for:
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (they 404 normally)
/// - `/api/auth/login`
pub async fn require_auth(
    State(state): State<PortalState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if path == "/api/auth/login" {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(uri = %req.uri(), "Request without authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {}", e)))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Role guard - HR administrators only
///
/// Protects employee create/delete and payroll mutation routes.
pub async fn require_hr_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if user.role != Role::HrAdmin {
        tracing::warn!(
            employee_id = user.employee_id,
            role = %user.role,
            "HR admin role required"
        );
        return Err(AppError::forbidden("HR administrator role required"));
    }

    Ok(next.run(req).await)
}

/// Role guard - managers and HR administrators
///
/// Protects performance review create/update routes.
pub async fn require_reviewer(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !matches!(user.role, Role::Manager | Role::HrAdmin) {
        tracing::warn!(
            employee_id = user.employee_id,
            role = %user.role,
            "Reviewer role required"
        );
        return Err(AppError::forbidden(
            "Manager or HR administrator role required",
        ));
    }

    Ok(next.run(req).await)
}
