//! Class schedule administration screen

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
    slug: "horarios",
    title: "Horários",
    singular: "Horário",
    api_path: "/horarios",
    listing: Listing::Placeholder,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "curso", label: "Curso" },
        Column { key: "dia_semana", label: "Dia" },
        Column { key: "hora_inicio", label: "Início" },
        Column { key: "hora_fim", label: "Fim" },
    ],
    fields: &[
        Field { name: "curso", label: "Curso", required: true, kind: "text" },
        Field { name: "dia_semana", label: "Dia da semana", required: true, kind: "text" },
        Field { name: "hora_inicio", label: "Hora de início", required: true, kind: "time" },
        Field { name: "hora_fim", label: "Hora de término", required: true, kind: "time" },
    ],
    placeholder_rows,
    flash_created: "Horário criado com sucesso",
    flash_updated: "Horário atualizado com sucesso",
    flash_deleted: "Horário excluído com sucesso",
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
            "dia_semana": "Segunda-feira",
            "hora_inicio": "08:00",
            "hora_fim": "10:00",
        }),
        json!({
            "id": 2,
            "curso": "Engenharia de Software",
            "dia_semana": "Quarta-feira",
            "hora_inicio": "14:00",
            "hora_fim": "16:00",
        }),
    ]
}
