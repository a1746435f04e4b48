//! Evaluation administration screen

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
    slug: "avaliacoes",
    title: "Avaliações",
    singular: "Avaliação",
    api_path: "/avaliacoes",
    listing: Listing::Placeholder,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "curso", label: "Curso" },
        Column { key: "titulo", label: "Título" },
        Column { key: "data", label: "Data" },
        Column { key: "peso", label: "Peso" },
    ],
    fields: &[
        Field { name: "curso", label: "Curso", required: true, kind: "text" },
        Field { name: "titulo", label: "Título", required: true, kind: "text" },
        Field { name: "data", label: "Data", required: true, kind: "date" },
        Field { name: "peso", label: "Peso", required: false, kind: "number" },
    ],
    placeholder_rows,
    flash_created: "Avaliação criada com sucesso",
    flash_updated: "Avaliação atualizada com sucesso",
    flash_deleted: "Avaliação excluída com sucesso",
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
            "curso": "Ciência da Computação",
            "titulo": "Prova 1 - Estruturas de Dados",
            "data": "2026-09-15",
            "peso": 40,
        }),
        json!({
            "id": 2,
            "curso": "Engenharia de Software",
            "titulo": "Trabalho final - Requisitos",
            "data": "2026-11-20",
            "peso": 60,
        }),
    ]
}
