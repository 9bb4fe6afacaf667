//! Personnel role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles that govern which personnel records a requester may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "personnel_role")]
pub enum PersonnelRole {
    /// Full access to every personnel record; may register personnel.
    #[serde(rename = "site-admin")]
    #[sqlx(rename = "site-admin")]
    SiteAdmin,
    /// Access to personnel of the same organization.
    #[serde(rename = "HR-admin")]
    #[sqlx(rename = "HR-admin")]
    HrAdmin,
    /// Access to the own record only.
    #[serde(rename = "reg-user")]
    #[sqlx(rename = "reg-user")]
    RegUser,
}

impl PersonnelRole {
    /// All roles, in descending privilege.
    pub const ALL: [PersonnelRole; 3] = [Self::SiteAdmin, Self::HrAdmin, Self::RegUser];

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiteAdmin => "site-admin",
            Self::HrAdmin => "HR-admin",
            Self::RegUser => "reg-user",
        }
    }
}

impl fmt::Display for PersonnelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PersonnelRole {
    type Err = leaveboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                leaveboard_core::AppError::validation(
                    "Role must be either HR-admin or site-admin or reg-user",
                )
            })
    }
}
