use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_SECRET, DEFAULT_SESSION_TTL_SECS,
    MIN_SESSION_SECRET_LEN, MIN_SESSION_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key material for signing session cookies
    pub secret: String,
    /// Sessions older than this are dropped on lookup
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SESSION_SECRET),
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::session(format!(
                "session.secret must be at least {} bytes, got {}",
                MIN_SESSION_SECRET_LEN,
                self.secret.len()
            )));
        }

        if self.ttl_secs < MIN_SESSION_TTL_SECS {
            return Err(ConfigError::session(format!(
                "session.ttl_secs must be >= {}, got {}",
                MIN_SESSION_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }

    pub fn is_default_secret(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }
}
