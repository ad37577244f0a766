//! Token Code Mapping Tables
//!
//! Each enumerated value is assigned a single-byte token code and a label.
//! The code assignments are a versioned contract; this build uses:
//!
//! | Access level           | code | Organization type | code |
//! |------------------------|------|-------------------|------|
//! | `reader`               | 10   | `conference`      | 10   |
//! | `contributor`          | 20   | `council`         | 20   |
//! | `approver`             | 30   |                   |      |
//! | `administrator`        | 40   |                   |      |
//! | `system`               | 200  |                   |      |
//! | `system_administrator` | 210  |                   |      |

use crate::types::{AccessLevel, OrganizationType};

/// Code returned when a value has no table entry. Never assigned to a value.
pub const UNKNOWN_CODE: u8 = 0;

/// Associates one enumerated value with its token code and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry<T: 'static> {
    /// The enumerated value.
    pub value: T,
    /// Single-byte code written to the claim.
    pub code: u8,
    /// Label matched case-insensitively by [`TokenCoded::from_label`].
    pub label: &'static str,
}

const fn access(value: AccessLevel, code: u8) -> MappingEntry<AccessLevel> {
    MappingEntry {
        value,
        code,
        label: value.as_str(),
    }
}

const fn organization(value: OrganizationType, code: u8) -> MappingEntry<OrganizationType> {
    MappingEntry {
        value,
        code,
        label: value.as_str(),
    }
}

/// Access level table, in enumeration order.
pub static ACCESS_LEVEL_MAPPINGS: [MappingEntry<AccessLevel>; 6] = [
    access(AccessLevel::Reader, 10),
    access(AccessLevel::Contributor, 20),
    access(AccessLevel::Approver, 30),
    access(AccessLevel::Administrator, 40),
    access(AccessLevel::System, 200),
    access(AccessLevel::SystemAdministrator, 210),
];

/// Organization type table, in enumeration order.
pub static ORGANIZATION_TYPE_MAPPINGS: [MappingEntry<OrganizationType>; 2] = [
    organization(OrganizationType::Conference, 10),
    organization(OrganizationType::Council, 20),
];

/// A closed enumeration with a token code table.
///
/// Lookups scan the table linearly; tables hold a handful of entries.
pub trait TokenCoded: Copy + Eq + 'static {
    /// The table for this enumeration.
    fn mappings() -> &'static [MappingEntry<Self>];

    /// Token code for this value, or [`UNKNOWN_CODE`] if the table lacks it.
    ///
    /// Callers must not trust [`UNKNOWN_CODE`]; it decodes to nothing.
    fn token_code(self) -> u8 {
        Self::mappings()
            .iter()
            .find(|entry| entry.value == self)
            .map_or(UNKNOWN_CODE, |entry| entry.code)
    }

    /// Value assigned to `code`, if any.
    fn from_token_code(code: u8) -> Option<Self> {
        Self::mappings()
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.value)
    }

    /// Value whose label matches `label`, ignoring ASCII case.
    fn from_label(label: &str) -> Option<Self> {
        Self::mappings()
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(label))
            .map(|entry| entry.value)
    }
}

impl TokenCoded for AccessLevel {
    fn mappings() -> &'static [MappingEntry<Self>] {
        &ACCESS_LEVEL_MAPPINGS
    }
}

impl TokenCoded for OrganizationType {
    fn mappings() -> &'static [MappingEntry<Self>] {
        &ORGANIZATION_TYPE_MAPPINGS
    }
}
