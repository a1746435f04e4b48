//! Notice administration screen
//!
//! Notices are the one entity with full backend support, listing included;
//! everything here proxies straight to `/avisos/`.

use crate::pages::PageError;
use crate::pages::entity::{self, Column, EntityScreen, Field, Listing};
use crate::session::CurrentUser;
use crate::state::AppState;

use std::collections::HashMap;

use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Response};
use serde::Deserialize;
use serde_json::{Value, json};

pub const SCREEN: EntityScreen = EntityScreen {
    slug: "avisos",
    title: "Avisos",
    singular: "Aviso",
    api_path: "/avisos",
    listing: Listing::Api,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "titulo", label: "Título" },
        Column { key: "mensagem", label: "Mensagem" },
        Column { key: "destinatario", label: "Destinatário" },
    ],
    fields: &[
        Field { name: "titulo", label: "Título", required: true, kind: "text" },
        Field { name: "mensagem", label: "Mensagem", required: true, kind: "textarea" },
        Field { name: "destinatario", label: "Destinatário", required: false, kind: "text" },
    ],
    placeholder_rows,
    flash_created: "Aviso criado com sucesso",
    flash_updated: "Aviso atualizado com sucesso",
    flash_deleted: "Aviso excluído com sucesso",
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    editar: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, PageError> {
    entity::render_list(&state, &user, &SCREEN, None, query.editar.as_deref()).await
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, PageError> {
    entity::handle_create(&state, &user, &SCREEN, form).await
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, PageError> {
    entity::handle_update(&state, &user, &SCREEN, id, form).await
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Response {
    entity::handle_delete(&state, &user, &SCREEN, id).await
}

/// Shown when the backend listing is unavailable
fn placeholder_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "titulo": "Bem-vindos ao semestre",
            "mensagem": "As aulas começam na próxima segunda-feira.",
            "destinatario": "todos",
        }),
        json!({
            "id": 2,
            "titulo": "Manutenção do sistema",
            "mensagem": "O chatbot ficará indisponível no sábado das 8h às 12h.",
            "destinatario": "todos",
        }),
    ]
}
