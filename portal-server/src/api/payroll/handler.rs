//! Payroll handlers
//!
//! The listing endpoints apply the visibility policy from [`crate::policy`];
//! the record-scoped endpoints map a failed check to 403 instead of
//! returning an empty list.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{PayrollEntry, PayrollPayload, PayrollRow};

use crate::auth::CurrentUser;
use crate::core::PortalState;
use crate::policy::{self, Requester};
use crate::utils::validation::{
    MAX_LABEL_LEN, validate_amount, validate_month_label, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/employees/me/payroll
///
/// Roles outside the visibility table are refused here too; the bootstrap
/// admin has no employee record to list for.
pub async fn my_payroll(
    State(state): State<PortalState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<PayrollEntry>>> {
    policy::ensure_filter_role(user.role)?;
    Ok(Json(state.payroll.list_for_employee(user.employee_id)))
}

/// GET /api/employees/{id}/payroll
///
/// 404 for unknown employees, 403 when the visibility policy rejects. The
/// existence check runs first so HR admins still get a 404 for bad ids.
pub async fn employee_payroll(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path(id): Path<u64>,
) -> AppResult<Json<Vec<PayrollEntry>>> {
    if !state.employees.exists(id) {
        return Err(AppError::not_found(format!("Employee {} not found", id)));
    }

    let requester = Requester::from(&user);
    let owner = state.accounts.owner_of(id);
    policy::ensure_may_view(&requester, &owner)?;

    Ok(Json(state.payroll.list_for_employee(id)))
}

fn validate_payload(payload: &PayrollPayload) -> AppResult<()> {
    validate_required_text(&payload.month, "month", MAX_LABEL_LEN)?;
    validate_month_label(&payload.month)?;
    validate_amount(payload.base_salary, "base_salary")?;
    validate_amount(payload.bonus, "bonus")?;
    validate_amount(payload.deductions, "deductions")?;
    Ok(())
}

/// POST /api/employees/{id}/payroll (HR admin only)
pub async fn create_entry(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path(id): Path<u64>,
    Json(payload): Json<PayrollPayload>,
) -> AppResult<Json<PayrollEntry>> {
    if !state.employees.exists(id) {
        return Err(AppError::not_found(format!("Employee {} not found", id)));
    }
    validate_payload(&payload)?;

    let entry = state.payroll.create(id, payload);
    tracing::info!(
        payroll_id = entry.id,
        employee_id = id,
        created_by = user.employee_id,
        "Payroll entry created"
    );
    Ok(Json(entry))
}

/// PUT /api/employees/{id}/payroll/{payroll_id} (HR admin only)
///
/// Full overwrite. The entry must belong to the employee in the path;
/// a mismatch is treated as not-found rather than moving the entry.
pub async fn overwrite_entry(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path((id, payroll_id)): Path<(u64, u64)>,
    Json(payload): Json<PayrollPayload>,
) -> AppResult<Json<PayrollEntry>> {
    let existing = state
        .payroll
        .get(payroll_id)
        .filter(|e| e.employee_id == id)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Payroll entry {} not found for employee {}",
                payroll_id, id
            ))
        })?;
    validate_payload(&payload)?;

    let entry = state
        .payroll
        .overwrite(existing.id, payload)
        .ok_or_else(|| AppError::internal("Payroll entry vanished during update"))?;
    tracing::info!(
        payroll_id = entry.id,
        employee_id = id,
        updated_by = user.employee_id,
        "Payroll entry overwritten"
    );
    Ok(Json(entry))
}

/// Query filters for the global payroll listing
#[derive(Debug, Deserialize)]
pub struct PayrollQuery {
    pub month: Option<String>,
    pub department: Option<String>,
}

/// Treat missing, empty and "All" (any case) as no filter
fn active_filter(value: Option<&String>) -> Option<&str> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// GET /api/payroll
///
/// The cross-company listing, joined against the employee directory and
/// filtered through the visibility policy. Entries whose employee record is
/// gone keep a placeholder name so historical rows stay listed for HR.
pub async fn global_payroll(
    State(state): State<PortalState>,
    user: CurrentUser,
    Query(query): Query<PayrollQuery>,
) -> AppResult<Json<Vec<PayrollRow>>> {
    policy::ensure_filter_role(user.role)?;
    let requester = Requester::from(&user);

    let month_filter = active_filter(query.month.as_ref());
    let department_filter = active_filter(query.department.as_ref());

    let mut rows: Vec<PayrollRow> = state
        .payroll
        .list_all()
        .into_iter()
        .filter(|entry| {
            policy::may_view(&requester, &state.accounts.owner_of(entry.employee_id))
        })
        .filter(|entry| month_filter.is_none_or(|m| entry.month == m))
        .filter_map(|entry| {
            let employee = state.employees.get(entry.employee_id);
            let (employee_name, department) = match employee {
                Some(e) => (e.name, e.department),
                None => ("Unknown".to_string(), "Unknown".to_string()),
            };
            if department_filter.is_some_and(|d| !department.eq_ignore_ascii_case(d)) {
                return None;
            }
            Some(PayrollRow {
                id: entry.id,
                employee_id: entry.employee_id,
                employee_name,
                department,
                month: entry.month,
                net_pay: entry.net_pay,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.month.cmp(&a.month).then(a.id.cmp(&b.id)));

    Ok(Json(rows))
}
