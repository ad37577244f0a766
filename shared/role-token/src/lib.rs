//! Organization Role Tokens
//!
//! Compresses a user's organization roles into a compact string for a token
//! claim, reads it back, and answers access checks over the decoded roles.
//!
//! ```
//! use role_token::{
//!     decode_roles, encode_roles, has_reader_access, AccessLevel, OrganizationType, Role,
//! };
//!
//! let roles = vec![Role::new("u1", 1_u64, OrganizationType::Conference, AccessLevel::Reader)];
//! let encoded = encode_roles(&roles)?;
//! assert_eq!(encoded, "10:1:10");
//!
//! let decoded: Vec<Role> = decode_roles(&encoded, "u1")?;
//! assert_eq!(decoded, roles);
//! assert!(has_reader_access(&1, Some(OrganizationType::Conference), &decoded));
//! # Ok::<(), role_token::RoleTokenError>(())
//! ```

pub mod authorizer;
pub mod claims;
pub mod codec;
pub mod config;
pub mod error;
pub mod mapping;
pub mod types;

pub use authorizer::{
    has_access, has_administrator_access, has_approver_access, has_contributor_access,
    has_reader_access, has_system_access, has_system_administrator_access, is_authorized,
    AccessCheck,
};
pub use claims::{EncodedRoles, RoleClaims};
pub use codec::{decode_roles, encode_roles, RoleCodec, FIELD_SEPARATOR, RECORD_SEPARATOR};
pub use config::{CodecConfig, MalformedRecordPolicy};
pub use error::{Result, RoleTokenError};
pub use mapping::{
    MappingEntry, TokenCoded, ACCESS_LEVEL_MAPPINGS, ORGANIZATION_TYPE_MAPPINGS, UNKNOWN_CODE,
};
pub use types::*;
