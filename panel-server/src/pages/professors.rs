//! Professor administration screen

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
    slug: "professores",
    title: "Professores",
    singular: "Professor",
    api_path: "/professores",
    listing: Listing::Placeholder,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "nome", label: "Nome" },
        Column { key: "email", label: "Email" },
        Column { key: "departamento", label: "Departamento" },
    ],
    fields: &[
        Field { name: "nome", label: "Nome", required: true, kind: "text" },
        Field { name: "email", label: "Email", required: true, kind: "email" },
        Field { name: "departamento", label: "Departamento", required: false, kind: "text" },
    ],
    placeholder_rows,
    flash_created: "Professor cadastrado com sucesso",
    flash_updated: "Professor atualizado com sucesso",
    flash_deleted: "Professor excluído com sucesso",
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
            "nome": "Dra. Helena Martins",
            "email": "helena.martins@uni.br",
            "departamento": "Computação",
        }),
        json!({
            "id": 2,
            "nome": "Dr. Rafael Costa",
            "email": "rafael.costa@uni.br",
            "departamento": "Matemática",
        }),
        json!({
            "id": 3,
            "nome": "Dra. Paula Ribeiro",
            "email": "paula.ribeiro@uni.br",
            "departamento": "Física",
        }),
    ]
}
