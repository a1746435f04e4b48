mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5005";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_SECRET: &str = "dev-secret-change-me-0123456789abcdef0123456789";
const DEFAULT_SESSION_TTL_SECS: u64 = 28_800;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const MIN_PORT: u16 = 1024;
const MIN_SESSION_SECRET_LEN: usize = 32;
const MIN_SESSION_TTL_SECS: u64 = 60;
const MAX_API_TIMEOUT_SECS: u64 = 120;

#[cfg(test)]
mod tests;
