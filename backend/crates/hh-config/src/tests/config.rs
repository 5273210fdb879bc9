use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _env = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.session.storage_key.as_str(), eq("helpingHandsUser"));
    assert_that!(config.session.login_delay_ms, eq(crate::DEFAULT_LOGIN_DELAY_MS));
    assert_that!(
        config.session.profile_delay_ms,
        eq(crate::DEFAULT_PROFILE_DELAY_MS)
    );
    assert_that!(config.api.latency_ms, eq(crate::DEFAULT_API_LATENCY_MS));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_creates_it() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".hh");
    let _guard = EnvGuard::set(crate::CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [session]
            login_delay_ms = 0
            storage_key = "portalUser"

            [api]
            latency_ms = 25

            [logging]
            level = "debug"
            colored = false
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.login_delay_ms, eq(0));
    assert_that!(config.session.storage_key.as_str(), eq("portalUser"));
    assert_that!(
        config.session.profile_delay_ms,
        eq(crate::DEFAULT_PROFILE_DELAY_MS)
    );
    assert_that!(config.api.latency_ms, eq(25));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[session]\nlogin_delay_ms = 200");
    let _delay = EnvGuard::set("HH_SESSION_LOGIN_DELAY_MS", "10");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.login_delay_ms, eq(10));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _env = setup_config_dir();
    let _key = EnvGuard::set("HH_SESSION_STORAGE_KEY", "otherUser");
    let _latency = EnvGuard::set("HH_API_LATENCY_MS", "5");
    let _level = EnvGuard::set("HH_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("HH_LOG_COLORED", "false");
    let _file = EnvGuard::set("HH_LOG_FILE", "hh.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.storage_key.as_str(), eq("otherUser"));
    assert_that!(config.api.latency_ms, eq(5));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("hh.log")));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_previous_value() {
    // Given
    let _env = setup_config_dir();
    let _delay = EnvGuard::set("HH_SESSION_LOGIN_DELAY_MS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.login_delay_ms, eq(crate::DEFAULT_LOGIN_DELAY_MS));
}

#[test]
#[serial]
fn given_log_file_configured_when_log_file_path_then_joins_config_and_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("HH_LOG_FILE", "portal.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("portal.log")));
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.log_file_path().unwrap(), None);
}
