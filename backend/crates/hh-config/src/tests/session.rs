use crate::{ApiConfig, SessionConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_session_config_when_validate_then_ok() {
    assert_that!(SessionConfig::default().validate(), ok(anything()));
}

#[test]
fn given_default_session_config_when_delays_then_match_portal_defaults() {
    let config = SessionConfig::default();

    assert_eq!(config.login_delay(), Duration::from_millis(1000));
    assert_eq!(config.profile_delay(), Duration::from_millis(500));
}

#[test]
fn given_empty_storage_key_when_validate_then_error() {
    let config = SessionConfig {
        storage_key: String::new(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_storage_key_with_path_separator_when_validate_then_error() {
    let config = SessionConfig {
        storage_key: "../escape".into(),
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("storage_key")
    );
}

#[test]
fn given_excessive_login_delay_when_validate_then_error() {
    let config = SessionConfig {
        login_delay_ms: 60_000,
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("login_delay_ms")
    );
}

#[test]
fn given_zero_page_size_when_validate_api_then_error() {
    let config = ApiConfig {
        default_page_size: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_latency_when_validate_api_then_ok() {
    let config = ApiConfig {
        latency_ms: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.latency(), Duration::ZERO);
}
