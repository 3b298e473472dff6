//! Employee directory CRUD and payroll / review mutation paths

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login, send, test_app};

#[tokio::test]
async fn test_create_employee_requires_hr_admin() {
    let (app, _state) = test_app();

    let manager = login(&app, "manager@test.com", "password123").await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/employees",
        Some(&manager),
        Some(json!({ "name": "New Hire", "email": "hire@company.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let hr = login(&app, "hradmin@test.com", "password123").await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees",
        Some(&hr),
        Some(json!({ "name": "New Hire", "email": "hire@company.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Ids continue after the five seeded records; defaults fill the rest
    assert_eq!(body["id"], 6);
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["department"], "");
}

#[tokio::test]
async fn test_create_employee_validates_input() {
    let (app, _state) = test_app();
    let hr = login(&app, "hradmin@test.com", "password123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/employees",
        Some(&hr),
        Some(json!({ "name": "   ", "email": "hire@company.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_partial_update_keeps_unset_fields() {
    let (app, _state) = test_app();
    let hr = login(&app, "hradmin@test.com", "password123").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/employees/1",
        Some(&hr),
        Some(json!({ "title": "Senior Software Engineer" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Senior Software Engineer");
    assert_eq!(body["name"], "Erin Employee");
    assert_eq!(body["department"], "Development");
}

#[tokio::test]
async fn test_employee_may_update_only_self() {
    let (app, _state) = test_app();
    let employee = login(&app, "employee@test.com", "password123").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/1",
        Some(&employee),
        Some(json!({ "title": "Engineer II" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/2",
        Some(&employee),
        Some(json!({ "title": "Intern" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_is_soft_and_repeatable() {
    let (app, _state) = test_app();
    let hr = login(&app, "hradmin@test.com", "password123").await;

    let (status, body) = send(&app, "DELETE", "/api/employees/5", Some(&hr), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));

    // The record survives with INACTIVE status
    let (status, body) = send(&app, "GET", "/api/employees/5", Some(&hr), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "INACTIVE");

    // Deleting again still succeeds
    let (status, _) = send(&app, "DELETE", "/api/employees/5", Some(&hr), None).await;
    assert_eq!(status, StatusCode::OK);

    // Unknown ids are a 404
    let (status, _) = send(&app, "DELETE", "/api/employees/999", Some(&hr), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payroll_net_pay_is_derived_not_accepted() {
    let (app, _state) = test_app();
    let hr = login(&app, "hradmin@test.com", "password123").await;

    // A net_pay field in the payload is ignored
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees/4/payroll",
        Some(&hr),
        Some(json!({
            "month": "2026-01",
            "base_salary": 7500.0,
            "bonus": 500.0,
            "deductions": 100.0,
            "net_pay": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["net_pay"], 7900.0);
    assert_eq!(body["employee_id"], 4);

    let payroll_id = body["id"].as_u64().expect("numeric id");

    // Overwrite recomputes
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/employees/4/payroll/{payroll_id}"),
        Some(&hr),
        Some(json!({ "month": "2026-01", "base_salary": 8000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["net_pay"], 8000.0);
    assert_eq!(body["id"], payroll_id);

    // Entry and path employee must match
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/employees/1/payroll/{payroll_id}"),
        Some(&hr),
        Some(json!({ "month": "2026-01", "base_salary": 8000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payroll_rejects_bad_month_and_negative_amounts() {
    let (app, _state) = test_app();
    let hr = login(&app, "hradmin@test.com", "password123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/employees/1/payroll",
        Some(&hr),
        Some(json!({ "month": "January 2026", "base_salary": 8000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(
        &app,
        "POST",
        "/api/employees/1/payroll",
        Some(&hr),
        Some(json!({ "month": "2026-01", "base_salary": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Payroll for a missing employee is a 404
    let (status, _) = send(
        &app,
        "POST",
        "/api/employees/999/payroll",
        Some(&hr),
        Some(json!({ "month": "2026-01", "base_salary": 8000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_creation_pins_the_reviewer() {
    let (app, _state) = test_app();

    let employee = login(&app, "employee@test.com", "password123").await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/employees/4/performance",
        Some(&employee),
        Some(json!({ "period": "2025-H2", "rating": 4.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let manager = login(&app, "manager@test.com", "password123").await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees/4/performance",
        Some(&manager),
        Some(json!({ "period": "2025-H2", "rating": 4.0, "comments": "Keeps improving" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviewer_id"], 2);
    let review_id = body["id"].as_u64().expect("numeric id");

    // A different reviewer overwriting keeps the original attribution
    let hr = login(&app, "hradmin@test.com", "password123").await;
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/employees/4/performance/{review_id}"),
        Some(&hr),
        Some(json!({ "period": "2025-H2", "rating": 3.5, "comments": "Adjusted after calibration" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviewer_id"], 2);
    assert_eq!(body["rating"], 3.5);
}

#[tokio::test]
async fn test_review_rating_bounds() {
    let (app, _state) = test_app();
    let manager = login(&app, "manager@test.com", "password123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/employees/1/performance",
        Some(&manager),
        Some(json!({ "period": "2025-H2", "rating": 5.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(
        &app,
        "POST",
        "/api/employees/1/performance",
        Some(&manager),
        Some(json!({ "period": "2025-H2", "rating": 0.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_endpoint_reflects_token() {
    let (app, _state) = test_app();
    let token = login(&app, "manager@test.com", "password123").await;

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["email"], "manager@test.com");
    assert_eq!(body["role"], "MANAGER");

    let (status, _) = send(&app, "POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}
