//! Role Types

use serde::{Deserialize, Serialize};

use super::{AccessLevel, OrganizationType};

/// One grant of an access level to a user within an organization.
///
/// The organization id is generic: numeric ids are the default, string ids
/// work as long as they implement `Display` and `FromStr`. Roles without an
/// organization type belong to the type-less claim layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role<Id = u64> {
    /// User the grant belongs to.
    pub user_id: String,
    /// Organization the grant applies to.
    pub organization_id: Id,
    /// Organization category, if the claim layout carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_type: Option<OrganizationType>,
    /// Granted access level.
    pub access: AccessLevel,
}

impl<Id> Role<Id> {
    /// Create a role scoped to a typed organization.
    pub fn new(
        user_id: impl Into<String>,
        organization_id: Id,
        organization_type: OrganizationType,
        access: AccessLevel,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            organization_id,
            organization_type: Some(organization_type),
            access,
        }
    }

    /// Create a role for an organization without a type.
    pub fn untyped(user_id: impl Into<String>, organization_id: Id, access: AccessLevel) -> Self {
        Self {
            user_id: user_id.into(),
            organization_id,
            organization_type: None,
            access,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_typed_role() {
        let role = Role::new("u1", 1_u64, OrganizationType::Conference, AccessLevel::Reader);
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "u1",
                "organizationId": 1,
                "organizationType": "conference",
                "access": "reader",
            })
        );
    }

    #[test]
    fn test_untyped_role_omits_organization_type() {
        let role = Role::untyped("u1", "org-7".to_string(), AccessLevel::Approver);
        let json = serde_json::to_value(&role).unwrap();
        assert!(json.get("organizationType").is_none());

        let restored: Role<String> = serde_json::from_value(json).unwrap();
        assert_eq!(restored, role);
    }
}
