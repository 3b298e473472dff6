//! Record visibility policy
//!
//! The one branching rule in the portal: given the authenticated requester
//! and the employee owning a payroll entry or performance review, decide
//! whether the requester may see it.
//!
//! | Requester role | Visible records |
//! |----------------|-----------------|
//! | EMPLOYEE | own records only |
//! | MANAGER | records of non-HR owners |
//! | HR_ADMIN | own records plus records of non-HR owners |
//! | anything else | none - the endpoint rejects before filtering |
//!
//! Owner roles come from the account directory. An owner with no account
//! (and therefore no known role) is only visible to themselves, matching the
//! listing endpoints which drop records they cannot attribute.

use shared::models::Role;

use crate::auth::CurrentUser;
use crate::utils::AppError;

/// The authenticated party asking for records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub employee_id: u64,
    pub role: Role,
}

impl From<&CurrentUser> for Requester {
    fn from(user: &CurrentUser) -> Self {
        Self {
            employee_id: user.employee_id,
            role: user.role,
        }
    }
}

/// The employee owning a candidate record
///
/// `role` is `None` when the owner has no account in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOwner {
    pub employee_id: u64,
    pub role: Option<Role>,
}

/// Per-record visibility decision
pub fn may_view(requester: &Requester, owner: &RecordOwner) -> bool {
    match requester.role {
        Role::Employee => owner.employee_id == requester.employee_id,
        Role::Manager => owner.role.is_some_and(|r| r != Role::HrAdmin),
        Role::HrAdmin => {
            owner.employee_id == requester.employee_id
                || owner.role.is_some_and(|r| r != Role::HrAdmin)
        }
        Role::Admin => false,
    }
}

/// Gate for the payroll/performance endpoints themselves
///
/// Roles outside the visibility table get a flat Forbidden instead of an
/// empty filtered result.
pub fn ensure_filter_role(role: Role) -> Result<(), AppError> {
    match role {
        Role::Employee | Role::Manager | Role::HrAdmin => Ok(()),
        other => Err(AppError::forbidden(format!(
            "Role {other} may not view payroll or performance data"
        ))),
    }
}

/// Record-level access check: Forbidden when the filter rejects
pub fn ensure_may_view(requester: &Requester, owner: &RecordOwner) -> Result<(), AppError> {
    ensure_filter_role(requester.role)?;
    if !may_view(requester, owner) {
        return Err(AppError::forbidden(
            "You are not allowed to view this employee's records",
        ));
    }
    Ok(())
}
