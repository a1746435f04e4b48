//! Document administration screen

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
    slug: "documentos",
    title: "Documentos",
    singular: "Documento",
    api_path: "/documentos",
    listing: Listing::Placeholder,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "titulo", label: "Título" },
        Column { key: "url", label: "URL" },
        Column { key: "descricao", label: "Descrição" },
    ],
    fields: &[
        Field { name: "titulo", label: "Título", required: true, kind: "text" },
        Field { name: "url", label: "URL", required: true, kind: "text" },
        Field { name: "descricao", label: "Descrição", required: false, kind: "textarea" },
    ],
    placeholder_rows,
    flash_created: "Documento cadastrado com sucesso",
    flash_updated: "Documento atualizado com sucesso",
    flash_deleted: "Documento excluído com sucesso",
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

fn placeholder_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "titulo": "Calendário acadêmico 2026",
            "url": "https://uni.br/docs/calendario-2026.pdf",
            "descricao": "Datas oficiais do ano letivo.",
        }),
        json!({
            "id": 2,
            "titulo": "Regulamento de estágio",
            "url": "https://uni.br/docs/estagio.pdf",
            "descricao": "",
        }),
    ]
}
