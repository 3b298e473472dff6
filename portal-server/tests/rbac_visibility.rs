//! Role-scoped visibility over payroll and performance data

mod common;

use http::StatusCode;
use serde_json::json;

use common::{login, send, test_app};
use portal_server::store::Account;
use shared::models::Role;

#[tokio::test]
async fn test_login_returns_token_and_role() {
    let (app, _state) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "employee@test.com", "password": "password123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["role"], "EMPLOYEE");
    assert_eq!(body["user"]["id"], 1);
}

#[tokio::test]
async fn test_login_wrong_password_is_uniform_401() {
    let (app, _state) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "employee@test.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");

    // Unknown email gives the identical error shape
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ghost@test.com", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");
}

#[tokio::test]
async fn test_api_requires_token() {
    let (app, _state) = test_app();

    let (status, _) = send(&app, "GET", "/api/employees", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Health stays public
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_employee_sees_only_own_payroll() {
    let (app, _state) = test_app();
    let token = login(&app, "employee@test.com", "password123").await;

    let (status, body) = send(&app, "GET", "/api/employees/me/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array body");
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e["employee_id"] == 1));

    // Record-level peek at someone else is a flat 403
    let (status, body) = send(&app, "GET", "/api/employees/2/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_employee_global_listing_is_own_rows_only() {
    let (app, _state) = test_app();
    let token = login(&app, "employee@test.com", "password123").await;

    let (status, body) = send(&app, "GET", "/api/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["employee_id"] == 1));
}

#[tokio::test]
async fn test_manager_listing_excludes_hr_and_unattributed() {
    let (app, _state) = test_app();
    let token = login(&app, "manager@test.com", "password123").await;

    let (status, body) = send(&app, "GET", "/api/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");

    // Employees 1 and 2 have non-HR accounts; 3 is HR, 4 and 5 have no
    // accounts at all
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r["employee_id"] == 1 || r["employee_id"] == 2));

    // Record-level access to the HR admin's data is refused outright
    let (status, _) = send(&app, "GET", "/api/employees/3/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_hr_admin_sees_self_but_not_hr_peers() {
    let (app, state) = test_app();

    // A second HR admin with their own payroll entry
    state.accounts.insert(Account {
        email: "hradmin2@test.com".to_string(),
        password_hash: Account::hash_password("password123").expect("hash"),
        display_name: "Harper Admin".to_string(),
        role: Role::HrAdmin,
        employee_id: 6,
    });
    state.employees.insert_seeded(shared::models::EmployeeRecord {
        id: 6,
        name: "Harper Admin".to_string(),
        email: "hradmin2@test.com".to_string(),
        department: "HR".to_string(),
        title: "HR Administrator".to_string(),
        status: shared::models::EmployeeStatus::Active,
    });
    state.payroll.create(
        6,
        shared::models::PayrollPayload {
            month: "2025-12".to_string(),
            base_salary: 11000.into(),
            bonus: 0.into(),
            deductions: 0.into(),
        },
    );

    let token = login(&app, "hradmin@test.com", "password123").await;

    let (status, body) = send(&app, "GET", "/api/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");

    // Own rows (3) plus non-HR accounts (1 and 2); the HR peer stays hidden
    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|r| r["employee_id"] != 6));
    assert!(rows.iter().any(|r| r["employee_id"] == 3));

    let (status, _) = send(&app, "GET", "/api/employees/6/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Own record-level listing works
    let (status, _) = send(&app, "GET", "/api/employees/3/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_role_is_locked_out_of_payroll_and_performance() {
    let (app, _state) = test_app();
    let token = login(&app, "admin@test.com", "admin123").await;

    let (status, body) = send(&app, "GET", "/api/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");

    // The me-routes refuse too; no empty-list fallback for unlisted roles
    let (status, body) = send(&app, "GET", "/api/employees/me/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");

    let (status, body) = send(
        &app,
        "GET",
        "/api/employees/me/performance",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");

    let (status, _) = send(&app, "GET", "/api/employees/1/payroll", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The directory itself stays readable
    let (status, _) = send(&app, "GET", "/api/employees", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_global_listing_filters_and_order() {
    let (app, _state) = test_app();
    let token = login(&app, "manager@test.com", "password123").await;

    // Month filter
    let (status, body) = send(&app, "GET", "/api/payroll?month=2025-12", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["month"] == "2025-12"));

    // "All" in any case means no filter
    let (status, body) = send(
        &app,
        "GET",
        "/api/payroll?month=ALL&department=all",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 6);

    // Department filter joins through the directory
    let (status, body) = send(
        &app,
        "GET",
        "/api/payroll?department=Development",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r["department"] == "Development"));

    // Month-descending order, joined names present
    let months: Vec<&str> = rows.iter().map(|r| r["month"].as_str().unwrap()).collect();
    let mut sorted = months.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(months, sorted);
    assert!(rows.iter().any(|r| r["employee_name"] == "Manny Manager"));
}

#[tokio::test]
async fn test_performance_visibility_matches_payroll() {
    let (app, _state) = test_app();

    let employee = login(&app, "employee@test.com", "password123").await;
    let (status, body) = send(
        &app,
        "GET",
        "/api/employees/me/performance",
        Some(&employee),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().expect("array body");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["reviewer_id"], 2);

    let (status, _) = send(
        &app,
        "GET",
        "/api/employees/4/performance",
        Some(&employee),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Employee 4 has no account, so even the manager is refused
    let manager = login(&app, "manager@test.com", "password123").await;
    let (status, _) = send(
        &app,
        "GET",
        "/api/employees/4/performance",
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Unknown employee is a 404 before any policy check
    let (status, _) = send(
        &app,
        "GET",
        "/api/employees/999/performance",
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
