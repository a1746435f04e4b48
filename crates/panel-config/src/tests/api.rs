use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _ctx = setup_config_dir();
    let _url = EnvGuard::set("PANEL_API_BASE_URL", "backend.internal:5005");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_base_url_when_validate_then_ok() {
    // Given
    let _ctx = setup_config_dir();
    let _url = EnvGuard::set("PANEL_API_BASE_URL", "https://backend.internal");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    // Given
    let _ctx = setup_config_dir();
    let _timeout = EnvGuard::set("PANEL_API_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_limit_when_validate_then_error() {
    // Given
    let _ctx = setup_config_dir();
    let _timeout = EnvGuard::set("PANEL_API_TIMEOUT_SECS", "600");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_env_base_url_when_load_then_applied() {
    // Given
    let _ctx = setup_config_dir();
    let _url = EnvGuard::set("PANEL_API_BASE_URL", "http://10.0.0.7:5005");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://10.0.0.7:5005"));
}
