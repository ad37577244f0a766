//! Token Claim Types
//!
//! The encoded role string travels inside a signed token. These types carry it
//! through serde; signing and verification belong to the token layer.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::RoleCodec;
use crate::error::Result;
use crate::types::Role;

/// Compact role string as stored in a claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedRoles(String);

impl EncodedRoles {
    /// Encode roles with the default codec.
    pub fn from_roles<Id: Display>(roles: &[Role<Id>]) -> Result<Self> {
        Self::encode_with(&RoleCodec::default(), roles)
    }

    /// Encode roles with a specific codec.
    pub fn encode_with<Id: Display>(codec: &RoleCodec, roles: &[Role<Id>]) -> Result<Self> {
        codec.encode(roles).map(Self)
    }

    /// Decode into roles owned by `user_id` with the default codec.
    pub fn decode<Id: FromStr>(&self, user_id: &str) -> Result<Vec<Role<Id>>> {
        self.decode_with(&RoleCodec::default(), user_id)
    }

    /// Decode into roles owned by `user_id` with a specific codec.
    pub fn decode_with<Id: FromStr>(&self, codec: &RoleCodec, user_id: &str) -> Result<Vec<Role<Id>>> {
        codec.decode(&self.0, user_id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for EncodedRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EncodedRoles> for String {
    fn from(roles: EncodedRoles) -> Self {
        roles.0
    }
}

/// Role claims of one user.
///
/// Flatten into the token's claim struct with `#[serde(flatten)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClaims {
    /// Subject (user ID). Every decoded role is attributed to it.
    pub sub: String,
    /// Encoded roles.
    #[serde(default)]
    pub roles: EncodedRoles,
}

impl RoleClaims {
    /// Build claims for `user_id` holding `roles`.
    pub fn new<Id: Display>(user_id: impl Into<String>, roles: &[Role<Id>]) -> Result<Self> {
        Ok(Self {
            sub: user_id.into(),
            roles: EncodedRoles::from_roles(roles)?,
        })
    }

    /// Decode the roles, attributing them to the subject.
    pub fn roles<Id: FromStr>(&self) -> Result<Vec<Role<Id>>> {
        self.roles.decode(&self.sub)
    }
}
