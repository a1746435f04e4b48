use crate::error::Result as ServerResult;
use crate::session::SessionStore;
use crate::views::TemplateEngine;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use panel_client::ApiClient;
use panel_config::Config;

/// Shared application state: immutable handles plus the session map
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub sessions: SessionStore,
    pub templates: Arc<TemplateEngine>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn from_config(config: Config) -> ServerResult<Self> {
        let api = ApiClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        let sessions = SessionStore::new(Duration::from_secs(config.session.ttl_secs));
        let templates = Arc::new(TemplateEngine::new(&config.server.templates_dir)?);
        let cookie_key = Key::derive_from(config.session.secret.as_bytes());

        Ok(Self {
            config: Arc::new(config),
            api,
            sessions,
            templates,
            cookie_key,
        })
    }
}

/// Lets SignedCookieJar extract its key straight from the state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
