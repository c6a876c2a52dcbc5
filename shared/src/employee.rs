//! Employee identity types
//!
//! Employees self-declare a display name and a role at login; there are no
//! credentials. The role is a closed set checked once at the boundary, never
//! compared as loose strings inside the domain logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employee role (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May create cars and move them between washing and awaiting_payment
    Washer,
    /// May finalize payment
    Cashier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Washer => "washer",
            Role::Cashier => "cashier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized role strings
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "washer" => Ok(Role::Washer),
            "cashier" => Ok(Role::Cashier),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// A logged-in employee as the rest of the system sees them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub name: String,
    pub role: Role,
}

impl EmployeeInfo {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_both_variants() {
        assert_eq!("washer".parse::<Role>().unwrap(), Role::Washer);
        assert_eq!("cashier".parse::<Role>().unwrap(), Role::Cashier);
        assert!("manager".parse::<Role>().is_err());
        assert!("Washer".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Cashier).unwrap(), "\"cashier\"");
    }
}
