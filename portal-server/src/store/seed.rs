//! Demo seed data
//!
//! Hard-coded records loaded at process start. Three of the accounts map to
//! employee records and exercise each visibility role; the bootstrap admin
//! has no employee record and is rejected by the payroll/performance
//! endpoints.

use anyhow::Context;
use rust_decimal::Decimal;

use shared::models::{EmployeeRecord, EmployeeStatus, PayrollPayload, PerformanceReview, Role};

use super::{Account, AccountStore, EmployeeStore, PayrollStore, ReviewStore};

/// Populate all stores with the demo dataset
pub fn seed_demo_data(
    accounts: &AccountStore,
    employees: &EmployeeStore,
    payroll: &PayrollStore,
    reviews: &ReviewStore,
) -> anyhow::Result<()> {
    seed_accounts(accounts)?;
    seed_employees(employees);
    seed_payroll(payroll);
    seed_reviews(reviews);

    tracing::info!("Seeded demo data: 4 accounts, 5 employees");
    Ok(())
}

fn seed_accounts(accounts: &AccountStore) -> anyhow::Result<()> {
    let entries = [
        ("employee@test.com", "password123", "Erin Employee", Role::Employee, 1),
        ("manager@test.com", "password123", "Manny Manager", Role::Manager, 2),
        ("hradmin@test.com", "password123", "Alex Admin", Role::HrAdmin, 3),
        ("admin@test.com", "admin123", "Portal Admin", Role::Admin, 0),
    ];

    for (email, password, display_name, role, employee_id) in entries {
        let password_hash = Account::hash_password(password)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("hashing seed password for {email}"))?;
        accounts.insert(Account {
            email: email.to_string(),
            password_hash,
            display_name: display_name.to_string(),
            role,
            employee_id,
        });
    }
    Ok(())
}

fn seed_employees(employees: &EmployeeStore) {
    let entries = [
        (1, "Erin Employee", "employee@test.com", "Development", "Software Engineer"),
        (2, "Manny Manager", "manager@test.com", "Development", "Engineering Manager"),
        (3, "Alex Admin", "hradmin@test.com", "HR", "HR Administrator"),
        // Demo-only employees: richer listings, no login accounts
        (4, "Dana Developer", "dev1@company.com", "Development", "Developer"),
        (5, "Chris Analyst", "analyst@company.com", "Analytics", "Data Analyst"),
    ];

    for (id, name, email, department, title) in entries {
        employees.insert_seeded(EmployeeRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            title: title.to_string(),
            status: EmployeeStatus::Active,
        });
    }
}

fn seed_payroll(payroll: &PayrollStore) {
    let entries: [(u64, &str, i64, i64, i64); 13] = [
        (1, "2025-12", 8000, 500, 200),
        (1, "2025-11", 8000, 300, 150),
        (1, "2025-10", 8000, 250, 150),
        (2, "2025-12", 10000, 800, 300),
        (2, "2025-11", 10000, 700, 400),
        (2, "2025-10", 10000, 600, 350),
        (3, "2025-12", 12000, 1500, 700),
        (3, "2025-11", 12000, 1300, 650),
        (3, "2025-10", 12000, 1200, 650),
        (4, "2025-12", 7500, 400, 180),
        (4, "2025-11", 7500, 350, 170),
        (5, "2025-12", 7800, 420, 200),
        (5, "2025-11", 7800, 380, 190),
    ];

    for (employee_id, month, base, bonus, deductions) in entries {
        payroll.create(
            employee_id,
            PayrollPayload {
                month: month.to_string(),
                base_salary: Decimal::from(base),
                bonus: Decimal::from(bonus),
                deductions: Decimal::from(deductions),
            },
        );
    }
}

fn seed_reviews(reviews: &ReviewStore) {
    let entries: [(u64, u64, u64, &str, f64, &str); 3] = [
        (1, 1, 2, "2025-H1", 4.5, "Great collaborator, strong technical skills"),
        (2, 4, 2, "2025-H1", 4.0, "Solid delivery, should take on more design work"),
        (3, 5, 2, "2025-H2", 3.5, "Good analysis quality, communication needs work"),
    ];

    for (id, employee_id, reviewer_id, period, rating, comments) in entries {
        reviews.insert_seeded(PerformanceReview {
            id,
            employee_id,
            reviewer_id,
            period: period.to_string(),
            rating,
            comments: comments.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_consistent() {
        let accounts = AccountStore::new();
        let employees = EmployeeStore::new();
        let payroll = PayrollStore::new();
        let reviews = ReviewStore::new();
        seed_demo_data(&accounts, &employees, &payroll, &reviews).expect("seed should succeed");

        // Every payroll entry and review belongs to a seeded employee
        for entry in payroll.list_all() {
            assert!(employees.exists(entry.employee_id));
        }
        for employee in employees.list() {
            for review in reviews.list_for_employee(employee.id) {
                assert!(employees.exists(review.employee_id));
            }
        }

        // The documented demo login resolves to the EMPLOYEE role
        let erin = accounts
            .find_by_email("employee@test.com")
            .expect("seed account present");
        assert_eq!(erin.role, Role::Employee);
        assert_eq!(erin.employee_id, 1);
    }
}
