//! Access checks over decoded role claims.

use role_token::{
    decode_roles, has_administrator_access, has_approver_access, has_contributor_access,
    has_reader_access, has_system_access, has_system_administrator_access, is_authorized,
    AccessCheck, AccessLevel, OrganizationType, Role,
};

const USER_ID: &str = "test_user_id";
const MATCHING_ORG: u64 = 1;
const OTHER_ORG: u64 = 0;
const CONFERENCE: Option<OrganizationType> = Some(OrganizationType::Conference);
const COUNCIL: Option<OrganizationType> = Some(OrganizationType::Council);

fn role(organization_id: u64, access: AccessLevel) -> Role {
    Role::new(USER_ID, organization_id, OrganizationType::Conference, access)
}

/// Runs the three standard scenarios against one predicate.
fn verify_access_check(check: AccessCheck, matching: AccessLevel, non_matching: AccessLevel) {
    let roles = vec![role(MATCHING_ORG, matching), role(MATCHING_ORG, non_matching)];
    assert!(
        check(&MATCHING_ORG, CONFERENCE, &roles),
        "roles containing {matching} in the organization should pass"
    );

    let roles = vec![role(MATCHING_ORG, non_matching)];
    assert!(
        !check(&MATCHING_ORG, CONFERENCE, &roles),
        "roles without {matching} should fail"
    );

    let roles = vec![role(OTHER_ORG, matching), role(MATCHING_ORG, non_matching)];
    assert!(
        !check(&MATCHING_ORG, CONFERENCE, &roles),
        "{matching} in a different organization should fail"
    );

    let roles = vec![role(MATCHING_ORG, matching)];
    assert!(
        !check(&MATCHING_ORG, COUNCIL, &roles),
        "{matching} in a different organization type should fail"
    );
}

#[test]
fn test_has_reader_access() {
    verify_access_check(has_reader_access, AccessLevel::Reader, AccessLevel::Contributor);
}

#[test]
fn test_has_contributor_access() {
    verify_access_check(has_contributor_access, AccessLevel::Contributor, AccessLevel::Reader);
}

#[test]
fn test_has_approver_access() {
    verify_access_check(has_approver_access, AccessLevel::Approver, AccessLevel::Reader);
}

#[test]
fn test_has_administrator_access() {
    verify_access_check(has_administrator_access, AccessLevel::Administrator, AccessLevel::Reader);
}

#[test]
fn test_has_system_access() {
    verify_access_check(has_system_access, AccessLevel::System, AccessLevel::Administrator);
}

#[test]
fn test_has_system_administrator_access() {
    verify_access_check(
        has_system_administrator_access,
        AccessLevel::SystemAdministrator,
        AccessLevel::Administrator,
    );
}

#[test]
fn test_reader_scenario_from_decoded_claim() {
    let roles: Vec<Role> = decode_roles("10:1:10|10:1:20", USER_ID).unwrap();

    assert!(has_reader_access(&1, CONFERENCE, &roles));
    assert!(!has_reader_access(&1, COUNCIL, &roles));
    assert!(!has_reader_access(&0, CONFERENCE, &roles));
}

#[test]
fn test_is_authorized() {
    let roles = vec![role(MATCHING_ORG, AccessLevel::Reader)];

    assert!(is_authorized(&[has_reader_access], &MATCHING_ORG, CONFERENCE, &roles));
    assert!(!is_authorized(&[has_contributor_access], &MATCHING_ORG, CONFERENCE, &roles));

    let editors: [AccessCheck; 2] = [
        AccessLevel::Contributor.check(),
        AccessLevel::Administrator.check(),
    ];
    assert!(!is_authorized(&editors, &MATCHING_ORG, CONFERENCE, &roles));

    let roles = vec![role(MATCHING_ORG, AccessLevel::Administrator)];
    assert!(is_authorized(&editors, &MATCHING_ORG, CONFERENCE, &roles));
}

#[test]
fn test_untyped_organizations_with_string_ids() {
    let roles: Vec<Role<String>> = decode_roles("acme:40|beta:10", USER_ID).unwrap();
    let acme = "acme".to_string();

    assert!(has_administrator_access(&acme, None, &roles));
    assert!(!has_reader_access(&acme, None, &roles));
    assert!(is_authorized(
        &[has_reader_access, has_administrator_access],
        &acme,
        None,
        &roles
    ));
}
