//! Landing screen after login

use crate::pages::PageError;
use crate::pages::entity::{nav_view, user_view};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::render_page;

use axum::extract::State;
use axum::response::Html;
use serde_json::json;

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, PageError> {
    let data = json!({
        "title": "Painel",
        "user": user_view(&user),
        "nav": nav_view(""),
    });

    let flash = state.sessions.take_flash(&user.session_id);
    render_page(&state.templates, "dashboard", flash, data)
}
