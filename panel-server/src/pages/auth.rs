//! Login, logout and the root redirect

use crate::pages::PageError;
use crate::pages::entity::error_flash;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;
use crate::views::render_page;

use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use panel_client::ClientError;
use panel_notify::FlashMessage;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    senha: String,
}

/// GET / — straight to the dashboard when a session exists
pub async fn index(State(state): State<AppState>, jar: SignedCookieJar) -> Redirect {
    let live = session_id_from(&jar)
        .and_then(|id| state.sessions.lookup(&id))
        .is_some();

    if live {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/login")
    }
}

/// GET /login
pub async fn login_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_login(&state, Vec::new(), "")
}

/// POST /login
///
/// Authenticates against the backend and creates the session. Failures
/// re-render the form with the typed email preserved instead of
/// redirecting, since there is no session yet to carry a flash.
pub async fn login_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    let email = form.email.trim().to_string();

    if email.is_empty() || form.senha.is_empty() {
        let flash = FlashMessage::error("Informe email e senha para entrar.");
        return render_login(&state, vec![flash], &email).map(IntoResponse::into_response);
    }

    match state.api.login(&email, &form.senha).await {
        Ok(user) => {
            log::info!(
                "login: {} <{}> ({})",
                user.identity.display_name,
                user.identity.email,
                user.identity.role
            );

            let session_id = state.sessions.create(user.token, user.identity);
            let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();

            Ok((jar.add(cookie), Redirect::to("/dashboard")).into_response())
        }
        Err(err) => {
            if matches!(err, ClientError::IdentityResolution { .. }) {
                log::error!("login for {} succeeded over HTTP but {}", email, err);
            } else {
                log::warn!("login for {} failed: {}", email, err);
            }

            let flash = login_flash(&err);
            render_login(&state, vec![flash], &email).map(IntoResponse::into_response)
        }
    }
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect) {
    if let Some(id) = session_id_from(&jar) {
        state.sessions.destroy(&id);
    }

    let expired = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(expired), Redirect::to("/login"))
}

fn render_login(
    state: &AppState,
    flash: Vec<FlashMessage>,
    email: &str,
) -> Result<Html<String>, PageError> {
    let data = json!({
        "title": "Login",
        "email": email,
    });
    render_page(&state.templates, "login", flash, data)
}

fn login_flash(err: &ClientError) -> FlashMessage {
    match err {
        ClientError::InvalidCredentials { .. } => FlashMessage::error(
            "Email ou senha inválidos! Verifique suas credenciais e tente novamente.",
        ),
        _ => error_flash(err),
    }
}

fn session_id_from(jar: &SignedCookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}
