//! Performance review handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{PerformanceReview, ReviewPayload};

use crate::auth::CurrentUser;
use crate::core::PortalState;
use crate::policy::{self, Requester};
use crate::utils::validation::{
    MAX_COMMENT_LEN, MAX_LABEL_LEN, validate_rating, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/employees/me/performance
///
/// Same role gate as the payroll routes: the bootstrap admin is refused
/// rather than handed an empty list.
pub async fn my_reviews(
    State(state): State<PortalState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<PerformanceReview>>> {
    policy::ensure_filter_role(user.role)?;
    Ok(Json(state.reviews.list_for_employee(user.employee_id)))
}

/// GET /api/employees/{id}/performance
///
/// Same 404-then-403 ordering as the payroll listing.
pub async fn employee_reviews(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path(id): Path<u64>,
) -> AppResult<Json<Vec<PerformanceReview>>> {
    if !state.employees.exists(id) {
        return Err(AppError::not_found(format!("Employee {} not found", id)));
    }

    let requester = Requester::from(&user);
    let owner = state.accounts.owner_of(id);
    policy::ensure_may_view(&requester, &owner)?;

    Ok(Json(state.reviews.list_for_employee(id)))
}

fn validate_payload(payload: &ReviewPayload) -> AppResult<()> {
    validate_required_text(&payload.period, "period", MAX_LABEL_LEN)?;
    validate_rating(payload.rating)?;
    if payload.comments.len() > MAX_COMMENT_LEN {
        return Err(AppError::validation(format!(
            "comments are too long ({} chars, max {})",
            payload.comments.len(),
            MAX_COMMENT_LEN
        )));
    }
    Ok(())
}

/// POST /api/employees/{id}/performance (manager or HR admin)
///
/// The reviewer is always the authenticated requester; the payload cannot
/// attribute a review to someone else.
pub async fn create_review(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path(id): Path<u64>,
    Json(payload): Json<ReviewPayload>,
) -> AppResult<Json<PerformanceReview>> {
    if !state.employees.exists(id) {
        return Err(AppError::not_found(format!("Employee {} not found", id)));
    }
    validate_payload(&payload)?;

    let review = state.reviews.create(id, user.employee_id, payload);
    tracing::info!(
        review_id = review.id,
        employee_id = id,
        reviewer_id = user.employee_id,
        "Performance review created"
    );
    Ok(Json(review))
}

/// PUT /api/employees/{id}/performance/{review_id} (manager or HR admin)
///
/// Full overwrite of period, rating and comments. The original reviewer is
/// kept even when a different reviewer edits.
pub async fn overwrite_review(
    State(state): State<PortalState>,
    user: CurrentUser,
    Path((id, review_id)): Path<(u64, u64)>,
    Json(payload): Json<ReviewPayload>,
) -> AppResult<Json<PerformanceReview>> {
    let existing = state
        .reviews
        .get(review_id)
        .filter(|r| r.employee_id == id)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Review {} not found for employee {}",
                review_id, id
            ))
        })?;
    validate_payload(&payload)?;

    let review = state
        .reviews
        .overwrite(existing.id, payload)
        .ok_or_else(|| AppError::internal("Review vanished during update"))?;
    tracing::info!(
        review_id = review.id,
        employee_id = id,
        updated_by = user.employee_id,
        "Performance review overwritten"
    );
    Ok(Json(review))
}
