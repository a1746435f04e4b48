use crate::{Config, LogLevel};
use crate::tests::{EnvGuard, setup_config_dir};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_known_level_strings_when_parse_then_mapped() {
    assert_that!(LogLevel::from_str("debug").unwrap().0, eq(LevelFilter::Debug));
    assert_that!(LogLevel::from_str("WARN").unwrap().0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::from_str("off").unwrap().0, eq(LevelFilter::Off));
}

#[test]
fn given_garbage_level_string_when_parse_then_info() {
    assert_that!(
        LogLevel::from_str("verbose-please").unwrap().0,
        eq(LevelFilter::Info)
    );
}

#[test]
#[serial]
fn given_env_level_when_load_then_applied() {
    // Given
    let _ctx = setup_config_dir();
    let _level = EnvGuard::set("PANEL_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_env_log_file_when_load_then_applied() {
    // Given
    let _ctx = setup_config_dir();
    let _file = EnvGuard::set("PANEL_LOG_FILE", "panel.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.file.as_deref(), eq(Some("panel.log")));
}
