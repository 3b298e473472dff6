//! Authentication handlers

use axum::{Json, extract::State};
use serde_json::json;

use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::core::PortalState;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_PASSWORD_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// POST /api/auth/login
///
/// Unknown email and wrong password produce the same error so the endpoint
/// cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<PortalState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let account = state
        .accounts
        .find_by_email(&payload.email)
        .ok_or_else(AppError::invalid_credentials)?;

    let verified = account
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !verified {
        tracing::warn!(email = %account.email, "Login attempt with wrong password");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(
            account.employee_id,
            &account.email,
            &account.display_name,
            account.role,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    tracing::info!(email = %account.email, role = %account.role, "Login successful");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: account.employee_id,
            email: account.email,
            name: account.display_name,
            role: account.role,
        },
    }))
}

/// GET /api/auth/me
pub async fn me(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.employee_id,
        email: user.email,
        name: user.display_name,
        role: user.role,
    })
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so logout is client-side; the endpoint exists so
/// clients have a uniform call to make.
pub async fn logout(user: CurrentUser) -> Json<serde_json::Value> {
    tracing::info!(email = %user.email, "Logout");
    Json(json!({ "message": "Logged out" }))
}
