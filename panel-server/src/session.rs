//! Server-side session records keyed by a signed cookie
//!
//! One session per logged-in staff user: the backend bearer token, the
//! resolved identity, and the pending flash queue. Expired records are
//! dropped lazily on lookup.

use crate::pages::PageError;
use crate::state::AppState;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::SignedCookieJar;
use chrono::{DateTime, Utc};
use panel_client::Identity;
use panel_notify::FlashMessage;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "panel_session";

#[derive(Debug, Clone)]
struct Session {
    token: String,
    identity: Identity,
    flash: Vec<FlashMessage>,
    created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a session for a freshly authenticated user
    pub fn create(&self, token: String, identity: Identity) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            token,
            identity,
            flash: Vec::new(),
            created_at: Utc::now(),
        };

        self.write().insert(id, session);
        id
    }

    pub fn destroy(&self, id: &Uuid) {
        self.write().remove(id);
    }

    /// Token and identity for a live session; expired sessions are removed
    /// here and report as absent.
    pub fn lookup(&self, id: &Uuid) -> Option<(String, Identity)> {
        let mut sessions = self.write();

        let expired = match sessions.get(id) {
            Some(session) => self.is_expired(session),
            None => return None,
        };

        if expired {
            sessions.remove(id);
            log::debug!("session {} expired", id);
            return None;
        }

        sessions
            .get(id)
            .map(|s| (s.token.clone(), s.identity.clone()))
    }

    /// Queue a flash message; false when the session is gone
    pub fn push_flash(&self, id: &Uuid, flash: FlashMessage) -> bool {
        match self.write().get_mut(id) {
            Some(session) => {
                session.flash.push(flash);
                true
            }
            None => false,
        }
    }

    /// Drain the flash queue; each message is consumed exactly once
    pub fn take_flash(&self, id: &Uuid) -> Vec<FlashMessage> {
        self.write()
            .get_mut(id)
            .map(|session| std::mem::take(&mut session.flash))
            .unwrap_or_default()
    }

    fn is_expired(&self, session: &Session) -> bool {
        let age = Utc::now().signed_duration_since(session.created_at);
        age.num_seconds() >= 0 && age.num_seconds() as u64 >= self.ttl.as_secs()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Session>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The authenticated user behind the current request.
///
/// Reads the signed session cookie and resolves it against the store;
/// anything short of a live session redirects to the login screen.
pub struct CurrentUser {
    pub session_id: Uuid,
    pub token: String,
    pub identity: Identity,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = PageError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());

            let session_id = jar
                .get(SESSION_COOKIE)
                .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
                .ok_or(PageError::Unauthenticated)?;

            let (token, identity) = state
                .sessions
                .lookup(&session_id)
                .ok_or(PageError::Unauthenticated)?;

            Ok(CurrentUser {
                session_id,
                token,
                identity,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: String::from("1"),
            display_name: String::from("Ana"),
            email: String::from("ana@uni.br"),
            role: String::from("coordenador"),
        }
    }

    #[test]
    fn live_session_resolves_token_and_identity() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let id = store.create(String::from("tok-1"), identity());

        let (token, who) = store.lookup(&id).unwrap();

        assert_eq!(token, "tok-1");
        assert_eq!(who.display_name, "Ana");
    }

    #[test]
    fn expired_session_is_dropped_on_lookup() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create(String::from("tok-1"), identity());

        assert!(store.lookup(&id).is_none());
        // and it is gone, not just filtered
        assert!(!store.push_flash(&id, FlashMessage::info("ping")));
    }

    #[test]
    fn flash_queue_is_consumed_exactly_once() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let id = store.create(String::from("tok-1"), identity());

        store.push_flash(&id, FlashMessage::success("Aviso criado com sucesso"));

        assert_eq!(store.take_flash(&id).len(), 1);
        assert!(store.take_flash(&id).is_empty());
    }

    #[test]
    fn destroyed_session_no_longer_resolves() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let id = store.create(String::from("tok-1"), identity());

        store.destroy(&id);

        assert!(store.lookup(&id).is_none());
    }
}
