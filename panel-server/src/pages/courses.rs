//! Course administration screen

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
    slug: "cursos",
    title: "Cursos",
    singular: "Curso",
    api_path: "/cursos",
    listing: Listing::Placeholder,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "nome", label: "Nome" },
        Column { key: "codigo", label: "Código" },
        Column { key: "carga_horaria", label: "Carga horária" },
    ],
    fields: &[
        Field { name: "nome", label: "Nome", required: true, kind: "text" },
        Field { name: "codigo", label: "Código", required: true, kind: "text" },
        Field { name: "carga_horaria", label: "Carga horária", required: false, kind: "number" },
    ],
    placeholder_rows,
    flash_created: "Curso criado com sucesso",
    flash_updated: "Curso atualizado com sucesso",
    flash_deleted: "Curso excluído com sucesso",
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
        json!({ "id": 1, "nome": "Ciência da Computação", "codigo": "CC-01", "carga_horaria": 3200 }),
        json!({ "id": 2, "nome": "Engenharia de Software", "codigo": "ES-02", "carga_horaria": 3000 }),
        json!({ "id": 3, "nome": "Sistemas de Informação", "codigo": "SI-03", "carga_horaria": 2800 }),
    ]
}
