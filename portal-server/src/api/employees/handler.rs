//! Employee directory handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate, Role};

use crate::auth::CurrentUser;
use crate::core::PortalState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/employees
///
/// The directory itself is visible to every authenticated user; only payroll
/// and performance data are role-filtered.
pub async fn list_employees(State(state): State<PortalState>) -> Json<Vec<EmployeeRecord>> {
    Json(state.employees.list())
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<PortalState>,
    Path(id): Path<u64>,
) -> AppResult<Json<EmployeeRecord>> {
    state
        .employees
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))
}

/// POST /api/employees (HR admin only)
pub async fn create_employee(
    State(state): State<PortalState>,
    user: CurrentUser,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeRecord>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let record = state.employees.create(payload);
    tracing::info!(
        employee_id = record.id,
        created_by = user.employee_id,
        "Employee created"
    );
    Ok(Json(record))
}

/// PUT /api/employees/{id}
///
/// Managers and HR admins may update anyone; regular employees only their
/// own record.
pub async fn update_employee(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path(id): Path<u64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeRecord>> {
    let allowed = matches!(user.role, Role::Manager | Role::HrAdmin) || user.employee_id == id;
    if !allowed {
        return Err(AppError::forbidden(
            "You may only update your own employee record",
        ));
    }

    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;

    state
        .employees
        .update(id, payload)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))
}

/// DELETE /api/employees/{id} (HR admin only)
///
/// Soft delete: the record stays in the directory with INACTIVE status so
/// historical payroll rows keep their owner. Returns `true` on success.
pub async fn deactivate_employee(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path(id): Path<u64>,
) -> AppResult<Json<bool>> {
    match state.employees.deactivate(id) {
        Some(_) => {
            tracing::info!(
                employee_id = id,
                deactivated_by = user.employee_id,
                "Employee deactivated"
            );
            Ok(Json(true))
        }
        None => Err(AppError::not_found(format!("Employee {} not found", id))),
    }
}
