use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Volunteer.as_str(), "volunteer");
    assert_eq!(Role::Donor.as_str(), "donor");
    assert_eq!(Role::Beneficiary.as_str(), "beneficiary");
}

#[test]
fn test_role_from_str_roundtrips_every_role() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_rejects_unknown_and_mixed_case() {
    assert!(matches!(
        Role::from_str("superuser"),
        Err(CoreError::InvalidRole { .. })
    ));
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_landing_paths() {
    assert_eq!(Role::Admin.landing_path(), "/admin");
    assert_eq!(Role::Volunteer.landing_path(), "/volunteer");
    assert_eq!(Role::Donor.landing_path(), "/donor");
    assert_eq!(Role::Beneficiary.landing_path(), "/beneficiary");
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Role::Beneficiary).unwrap(),
        "\"beneficiary\""
    );
    let role: Role = serde_json::from_str("\"donor\"").unwrap();
    assert_eq!(role, Role::Donor);
}
