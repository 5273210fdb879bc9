use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_from_str() {
    assert_eq!(UserStatus::from_str("active").unwrap(), UserStatus::Active);
    assert_eq!(
        UserStatus::from_str("inactive").unwrap(),
        UserStatus::Inactive
    );
    assert_eq!(UserStatus::from_str("pending").unwrap(), UserStatus::Pending);
    assert!(UserStatus::from_str("banned").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}
