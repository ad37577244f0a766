//! Access Level Types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoleTokenError;
use crate::mapping::TokenCoded;

/// Permission tier a user holds within one organization.
///
/// Levels are independent grants. Holding [`AccessLevel::Administrator`] does
/// not imply [`AccessLevel::Reader`]; callers combine checks explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Read-only access.
    Reader,
    /// May submit content.
    Contributor,
    /// May approve submitted content.
    Approver,
    /// Manages the organization.
    Administrator,
    /// Service-level access.
    System,
    /// Service-level administration.
    SystemAdministrator,
}

impl AccessLevel {
    /// Returns the string tag used at API boundaries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reader => "reader",
            Self::Contributor => "contributor",
            Self::Approver => "approver",
            Self::Administrator => "administrator",
            Self::System => "system",
            Self::SystemAdministrator => "system_administrator",
        }
    }

    /// Returns all access levels in mapping-table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Reader,
            Self::Contributor,
            Self::Approver,
            Self::Administrator,
            Self::System,
            Self::SystemAdministrator,
        ]
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = RoleTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| RoleTokenError::UnknownLabel(s.to_string()))
    }
}
