//! Compact Role Encoding
//!
//! Wire format: records joined by `|`, each record's fields joined by `:`.
//!
//! - Typed record: `organizationTypeCode:organizationId:accessLevelCode`
//! - Type-less record: `organizationId:accessLevelCode`
//!
//! Codes are decimal bytes from [`crate::mapping`]. The organization id is
//! written with its `Display` form and read back with `FromStr`.

use std::fmt::Display;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::config::{CodecConfig, MalformedRecordPolicy};
use crate::error::{Result, RoleTokenError};
use crate::mapping::TokenCoded;
use crate::types::{AccessLevel, OrganizationType, Role};

/// Separates the fields of one record.
pub const FIELD_SEPARATOR: &str = ":";

/// Separates records.
pub const RECORD_SEPARATOR: &str = "|";

/// Encodes role lists into claim strings and back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCodec {
    config: CodecConfig,
}

impl RoleCodec {
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode roles into one claim string, preserving order.
    ///
    /// Fails with [`RoleTokenError::InvalidOrganizationId`] if an id is empty
    /// or contains a separator, since it could not be read back.
    pub fn encode<Id: Display>(&self, roles: &[Role<Id>]) -> Result<String> {
        let records = roles
            .iter()
            .map(encode_record)
            .collect::<Result<Vec<_>>>()?;

        trace!(records = records.len(), "Encoded role claim");
        Ok(records.join(RECORD_SEPARATOR))
    }

    /// Decode a claim string into roles owned by `user_id`.
    ///
    /// Records whose codes are not in the mapping tables are skipped. Records
    /// that fail to parse are handled per [`MalformedRecordPolicy`].
    pub fn decode<Id: FromStr>(&self, encoded: &str, user_id: &str) -> Result<Vec<Role<Id>>> {
        if encoded.is_empty() {
            return Ok(Vec::new());
        }

        let mut roles = Vec::new();
        for record in encoded.split(RECORD_SEPARATOR) {
            let parsed = match parse_record::<Id>(record) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(record, error = %err, "Malformed role record");
                    match self.config.malformed_records {
                        MalformedRecordPolicy::Reject => return Err(err),
                        MalformedRecordPolicy::Skip => continue,
                    }
                }
            };

            let organization_type = match parsed.organization_type_code {
                None => Some(None),
                Some(code) => OrganizationType::from_token_code(code).map(Some),
            };
            let access = AccessLevel::from_token_code(parsed.access_code);

            match (organization_type, access) {
                (Some(organization_type), Some(access)) => roles.push(Role {
                    user_id: user_id.to_string(),
                    organization_id: parsed.organization_id,
                    organization_type,
                    access,
                }),
                _ => debug!(
                    record,
                    organization_type_code = ?parsed.organization_type_code,
                    access_code = parsed.access_code,
                    "Skipping role record with unknown token code"
                ),
            }
        }

        trace!(roles = roles.len(), "Decoded role claim");
        Ok(roles)
    }
}

/// Encode roles with the default codec.
pub fn encode_roles<Id: Display>(roles: &[Role<Id>]) -> Result<String> {
    RoleCodec::default().encode(roles)
}

/// Decode a claim string with the default codec.
pub fn decode_roles<Id: FromStr>(encoded: &str, user_id: &str) -> Result<Vec<Role<Id>>> {
    RoleCodec::default().decode(encoded, user_id)
}

fn encode_record<Id: Display>(role: &Role<Id>) -> Result<String> {
    let organization_id = role.organization_id.to_string();
    if organization_id.is_empty() {
        return Err(RoleTokenError::InvalidOrganizationId {
            id: organization_id,
            reason: "must not be empty".to_string(),
        });
    }
    for separator in [FIELD_SEPARATOR, RECORD_SEPARATOR] {
        if organization_id.contains(separator) {
            return Err(RoleTokenError::InvalidOrganizationId {
                reason: format!("must not contain '{separator}'"),
                id: organization_id,
            });
        }
    }

    let access_code = role.access.token_code();
    Ok(match role.organization_type {
        Some(organization_type) => format!(
            "{}{FIELD_SEPARATOR}{organization_id}{FIELD_SEPARATOR}{access_code}",
            organization_type.token_code()
        ),
        None => format!("{organization_id}{FIELD_SEPARATOR}{access_code}"),
    })
}

/// A record whose fields parsed but whose codes are not yet resolved.
struct ParsedRecord<Id> {
    organization_type_code: Option<u8>,
    organization_id: Id,
    access_code: u8,
}

fn parse_record<Id: FromStr>(record: &str) -> Result<ParsedRecord<Id>> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    let (organization_type_code, organization_id, access_code) = match fields.as_slice() {
        [organization_type, organization_id, access] => (
            Some(parse_code(record, "organization type", organization_type)?),
            *organization_id,
            *access,
        ),
        [organization_id, access] => (None, *organization_id, *access),
        _ => {
            return Err(RoleTokenError::malformed(
                record,
                format!("expected 2 or 3 fields, found {}", fields.len()),
            ))
        }
    };

    Ok(ParsedRecord {
        organization_type_code,
        organization_id: parse_organization_id(record, organization_id)?,
        access_code: parse_code(record, "access level", access_code)?,
    })
}

fn parse_code(record: &str, name: &str, field: &str) -> Result<u8> {
    field
        .parse()
        .map_err(|_| RoleTokenError::malformed(record, format!("{name} code {field:?} is not a byte")))
}

fn parse_organization_id<Id: FromStr>(record: &str, field: &str) -> Result<Id> {
    if field.is_empty() {
        return Err(RoleTokenError::malformed(record, "organization id is empty"));
    }
    field
        .parse()
        .map_err(|_| RoleTokenError::malformed(record, format!("organization id {field:?} is not valid")))
}
