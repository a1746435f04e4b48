use crate::{ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, SessionConfig};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Load .env if present (development)
    /// 2. Check for PANEL_CONFIG_DIR env var, else use ./.panel/
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PANEL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;
        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PANEL_CONFIG_DIR env var > ./.panel/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PANEL_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".panel"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.api.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  templates: {}", self.server.templates_dir);
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  session: ttl {}s, secret {}",
            self.session.ttl_secs,
            if self.session.is_default_secret() {
                "DEFAULT (set PANEL_SESSION_SECRET in production)"
            } else {
                "configured"
            }
        );
        info!(
            "  logging: level={:?}, output={}",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PANEL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PANEL_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("PANEL_TEMPLATES_DIR", &mut self.server.templates_dir);
        Self::apply_env_string("PANEL_STATIC_DIR", &mut self.server.static_dir);

        // API
        Self::apply_env_string("PANEL_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("PANEL_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_string("PANEL_SESSION_SECRET", &mut self.session.secret);
        Self::apply_env_parse("PANEL_SESSION_TTL_SECS", &mut self.session.ttl_secs);

        // Logging
        Self::apply_env_parse("PANEL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PANEL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PANEL_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse() {
                *target = parsed;
            }
        }
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            match val.to_lowercase().as_str() {
                "1" | "true" | "yes" => *target = true,
                "0" | "false" | "no" => *target = false,
                _ => {}
            }
        }
    }
}
