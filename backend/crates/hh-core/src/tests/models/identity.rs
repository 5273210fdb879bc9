use crate::{Identity, IdentityPatch, Role, UserStatus};

use chrono::{DateTime, TimeZone, Utc};

fn volunteer() -> Identity {
    let created: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    Identity {
        id: "2".into(),
        name: "John Volunteer".into(),
        email: "volunteer@helpinghands.org".into(),
        phone: None,
        avatar: None,
        role: Role::Volunteer,
        status: UserStatus::Active,
        created_at: created,
        updated_at: created,
    }
}

#[test]
fn given_identity_when_serialized_then_uses_camel_case_keys() {
    let json = serde_json::to_string(&volunteer()).unwrap();

    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"updatedAt\""));
    assert!(json.contains("\"role\":\"volunteer\""));
    assert!(!json.contains("phone"));
}

#[test]
fn given_browser_style_record_when_deserialized_then_parses() {
    let json = r#"{
        "id": "1",
        "name": "Admin User",
        "email": "admin@helpinghands.org",
        "role": "admin",
        "status": "active",
        "avatar": "https://example.org/a.png",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.avatar.as_deref(), Some("https://example.org/a.png"));
    assert!(identity.phone.is_none());
}

#[test]
fn given_patch_when_merged_then_only_supplied_fields_change() {
    let original = volunteer();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let patch = IdentityPatch {
        name: Some("Johnny Volunteer".into()),
        phone: Some("+880 1700 000000".into()),
        ..Default::default()
    };

    let merged = original.merged(&patch, now);

    assert_eq!(merged.name, "Johnny Volunteer");
    assert_eq!(merged.phone.as_deref(), Some("+880 1700 000000"));
    assert_eq!(merged.email, original.email);
    assert_eq!(merged.role, original.role);
    assert_eq!(merged.created_at, original.created_at);
    assert_eq!(merged.updated_at, now);
}

#[test]
fn given_empty_patch_when_merged_then_only_timestamp_changes() {
    let original = volunteer();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    let merged = original.merged(&IdentityPatch::default(), now);

    let restamped = Identity {
        updated_at: original.updated_at,
        ..merged.clone()
    };
    assert_eq!(restamped, original);
    assert_eq!(merged.updated_at, now);
}

#[test]
fn given_identity_when_has_role_then_checks_allow_list() {
    let identity = volunteer();

    assert!(identity.has_role(&[Role::Admin, Role::Volunteer]));
    assert!(!identity.has_role(&[Role::Admin]));
    assert!(!identity.has_role(&[]));
}

#[test]
fn given_blank_name_when_validate_patch_then_fails() {
    let patch = IdentityPatch {
        name: Some("   ".into()),
        ..Default::default()
    };
    assert!(patch.validate().is_err());
}

#[test]
fn given_malformed_email_when_validate_patch_then_fails() {
    for email in [
        "no-at-sign",
        "@helpinghands.org",
        "user@localhost",
        "a@b.",
        "a b@c.d",
    ] {
        let patch = IdentityPatch {
            email: Some(email.into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err(), "{email} should be rejected");
    }
}

#[test]
fn given_valid_patch_when_validate_then_ok() {
    let patch = IdentityPatch {
        name: Some("Sarah".into()),
        email: Some("sarah@helpinghands.org".into()),
        ..Default::default()
    };
    assert!(patch.validate().is_ok());
    assert!(!patch.is_empty());
    assert!(IdentityPatch::default().is_empty());
}
