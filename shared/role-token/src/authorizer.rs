//! Authorization Predicates
//!
//! Each predicate asks whether a decoded role list grants one exact access
//! level in one organization. Levels do not imply each other: an
//! administrator is not a reader unless the claim says so. Combine levels
//! with [`is_authorized`].
//!
//! Pass `None` as the organization type to check grants from the type-less
//! claim layout.

use crate::types::{AccessLevel, OrganizationType, Role};

/// Signature shared by the per-level predicates.
pub type AccessCheck<Id = u64> = fn(&Id, Option<OrganizationType>, &[Role<Id>]) -> bool;

/// Whether any role grants `access` in the given organization.
///
/// Matches on organization id, organization type, and access level exactly.
pub fn has_access<Id: PartialEq>(
    access: AccessLevel,
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    roles.iter().any(|role| {
        role.organization_id == *organization_id
            && role.organization_type == organization_type
            && role.access == access
    })
}

/// Whether any of `checks` passes. Returns false for an empty list.
pub fn is_authorized<Id>(
    checks: &[AccessCheck<Id>],
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    checks
        .iter()
        .any(|check| check(organization_id, organization_type, roles))
}

/// Whether the user has reader access in the organization.
pub fn has_reader_access<Id: PartialEq>(
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    has_access(AccessLevel::Reader, organization_id, organization_type, roles)
}

/// Whether the user has contributor access in the organization.
pub fn has_contributor_access<Id: PartialEq>(
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    has_access(
        AccessLevel::Contributor,
        organization_id,
        organization_type,
        roles,
    )
}

/// Whether the user has approver access in the organization.
pub fn has_approver_access<Id: PartialEq>(
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    has_access(AccessLevel::Approver, organization_id, organization_type, roles)
}

/// Whether the user has administrator access in the organization.
pub fn has_administrator_access<Id: PartialEq>(
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    has_access(
        AccessLevel::Administrator,
        organization_id,
        organization_type,
        roles,
    )
}

/// Whether the user has system access in the organization.
pub fn has_system_access<Id: PartialEq>(
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    has_access(AccessLevel::System, organization_id, organization_type, roles)
}

/// Whether the user has system administrator access in the organization.
pub fn has_system_administrator_access<Id: PartialEq>(
    organization_id: &Id,
    organization_type: Option<OrganizationType>,
    roles: &[Role<Id>],
) -> bool {
    has_access(
        AccessLevel::SystemAdministrator,
        organization_id,
        organization_type,
        roles,
    )
}

impl AccessLevel {
    /// The predicate that checks for exactly this level.
    #[must_use]
    pub fn check<Id: PartialEq>(self) -> AccessCheck<Id> {
        match self {
            Self::Reader => has_reader_access::<Id>,
            Self::Contributor => has_contributor_access::<Id>,
            Self::Approver => has_approver_access::<Id>,
            Self::Administrator => has_administrator_access::<Id>,
            Self::System => has_system_access::<Id>,
            Self::SystemAdministrator => has_system_administrator_access::<Id>,
        }
    }
}
