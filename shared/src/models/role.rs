//! Role Model

use serde::{Deserialize, Serialize};

/// Portal role (RBAC)
///
/// Serialized in wire format as `EMPLOYEE`, `MANAGER`, `HR_ADMIN`, `ADMIN`.
/// Only the first three participate in payroll/performance visibility;
/// `Admin` is the bootstrap account role and is rejected by those endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    HrAdmin,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::HrAdmin => "HR_ADMIN",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown role string in a stored token or payload
#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            "HR_ADMIN" => Ok(Role::HrAdmin),
            "ADMIN" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Employee, Role::Manager, Role::HrAdmin, Role::Admin] {
            let parsed: Role = role.as_str().parse().expect("role should parse back");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("SUPERUSER".parse::<Role>().is_err());
    }
}
