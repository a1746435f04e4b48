//! Canonical identity extraction from heterogeneous login payloads
//!
//! The backend has grown several login response shapes over time; some nest
//! the user record, some inline it, and the field names differ per role.
//! Resolution scans a fixed candidate-key order per attribute and takes the
//! first present non-null value.

use crate::{ClientError, ClientResult};

use serde_json::Value;

/// Role-specific id fields come before generic ones
const ID_KEYS: [&str; 5] = ["id_coordenador", "id_professor", "id_usuario", "user_id", "id"];
const NAME_KEYS: [&str; 4] = ["nome", "nome_completo", "name", "usuario"];
const EMAIL_KEYS: [&str; 3] = ["email", "e_mail", "mail"];
const ROLE_KEYS: [&str; 4] = ["tipo", "tipo_usuario", "perfil", "role"];
const TOKEN_KEYS: [&str; 3] = ["token", "access_token", "jwt"];

/// Some responses nest the user record under one of these
const CONTAINER_KEYS: [&str; 4] = ["usuario", "user", "dados", "data"];

const DEFAULT_ROLE: &str = "desconhecido";

/// Canonical staff identity, constructed once at login and kept on the
/// session until logout or expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
}

/// Identity plus the bearer token the backend issued for it
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub identity: Identity,
    pub token: String,
}

impl Identity {
    /// Resolve an identity from a login payload.
    ///
    /// `login_email` is the address the user typed into the form; it backs
    /// the email fallback and, through it, the display-name fallback.
    pub fn resolve(payload: &Value, login_email: &str) -> ClientResult<Self> {
        let id = lookup(payload, &ID_KEYS)
            .and_then(stringify_scalar)
            .ok_or_else(|| {
                log::warn!(
                    "login payload carried none of the known id fields (top-level keys: {:?})",
                    top_level_keys(payload)
                );
                ClientError::identity("no recognizable id field in login response")
            })?;

        let email = lookup(payload, &EMAIL_KEYS)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| login_email.to_string());

        let display_name = lookup(payload, &NAME_KEYS)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| email_local_part(&email));

        let role = lookup(payload, &ROLE_KEYS)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        Ok(Self {
            id,
            display_name,
            email,
            role,
        })
    }
}

impl AuthenticatedUser {
    /// Resolve identity and bearer token from a successful login response.
    ///
    /// HTTP success without a resolvable identity or token is still a login
    /// failure, reported distinctly from invalid credentials.
    pub fn from_login_payload(payload: &Value, login_email: &str) -> ClientResult<Self> {
        let identity = Identity::resolve(payload, login_email)?;

        let token = lookup(payload, &TOKEN_KEYS)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ClientError::identity("login response carried no bearer token"))?;

        Ok(Self { identity, token })
    }
}

/// First present non-null value for any candidate key, preferring a nested
/// user container over the top level.
fn lookup<'a>(payload: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let container = CONTAINER_KEYS
        .iter()
        .find_map(|key| payload.get(key).filter(|v| v.is_object()));

    for scope in container.into_iter().chain(std::iter::once(payload)) {
        for key in keys {
            if let Some(value) = scope.get(key).filter(|v| !v.is_null()) {
                return Some(value);
            }
        }
    }

    None
}

/// Ids arrive as strings or numbers depending on the endpoint
fn stringify_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn email_local_part(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

fn top_level_keys(payload: &Value) -> Vec<String> {
    payload
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
