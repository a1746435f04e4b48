//! Student administration screen
//!
//! `GET /alunos/` does not exist on the backend; the listing is served from
//! placeholder data without calling the API. Mutations are still proxied.

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
    slug: "alunos",
    title: "Alunos",
    singular: "Aluno",
    api_path: "/alunos",
    listing: Listing::Placeholder,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "nome", label: "Nome" },
        Column { key: "email", label: "Email" },
        Column { key: "matricula", label: "Matrícula" },
        Column { key: "curso", label: "Curso" },
    ],
    fields: &[
        Field { name: "nome", label: "Nome", required: true, kind: "text" },
        Field { name: "email", label: "Email", required: true, kind: "email" },
        Field { name: "matricula", label: "Matrícula", required: true, kind: "text" },
        Field { name: "curso", label: "Curso", required: false, kind: "text" },
    ],
    placeholder_rows,
    flash_created: "Aluno cadastrado com sucesso",
    flash_updated: "Aluno atualizado com sucesso",
    flash_deleted: "Aluno excluído com sucesso",
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
            "nome": "Mariana Alves",
            "email": "mariana.alves@aluno.uni.br",
            "matricula": "2023010045",
            "curso": "Ciência da Computação",
        }),
        json!({
            "id": 2,
            "nome": "João Pedro Lima",
            "email": "joao.lima@aluno.uni.br",
            "matricula": "2023010112",
            "curso": "Engenharia de Software",
        }),
        json!({
            "id": 3,
            "nome": "Beatriz Nunes",
            "email": "beatriz.nunes@aluno.uni.br",
            "matricula": "2022009871",
            "curso": "Sistemas de Informação",
        }),
    ]
}
