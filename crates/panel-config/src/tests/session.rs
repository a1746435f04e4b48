use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_short_secret_when_validate_then_error() {
    // Given
    let _ctx = setup_config_dir();
    let _secret = EnvGuard::set("PANEL_SESSION_SECRET", "too-short");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_long_secret_when_validate_then_ok() {
    // Given
    let _ctx = setup_config_dir();
    let _secret = EnvGuard::set(
        "PANEL_SESSION_SECRET",
        "an-actually-long-enough-secret-for-signing-cookies",
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(config.session.is_default_secret(), eq(false));
}

#[test]
#[serial]
fn given_tiny_ttl_when_validate_then_error() {
    // Given
    let _ctx = setup_config_dir();
    let _ttl = EnvGuard::set("PANEL_SESSION_TTL_SECS", "5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_no_override_when_load_then_default_secret_flagged() {
    // Given
    let _ctx = setup_config_dir();
    let _secret = EnvGuard::remove("PANEL_SESSION_SECRET");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.is_default_secret(), eq(true));
}
