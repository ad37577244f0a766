//! Organization Types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoleTokenError;
use crate::mapping::TokenCoded;

/// Category of organization a grant applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    /// A conference.
    Conference,
    /// A council.
    Council,
}

impl OrganizationType {
    /// Returns the string tag used at API boundaries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Council => "council",
        }
    }

    /// Returns all organization types in mapping-table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Conference, Self::Council]
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationType {
    type Err = RoleTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| RoleTokenError::UnknownLabel(s.to_string()))
    }
}
