//! Knowledge-base administration screen
//!
//! Question/answer pairs the chatbot answers from. Full backend support,
//! listing included.

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
    slug: "conhecimento",
    title: "Base de Conhecimento",
    singular: "Item de conhecimento",
    api_path: "/conhecimento",
    listing: Listing::Api,
    creatable: true,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "pergunta", label: "Pergunta" },
        Column { key: "resposta", label: "Resposta" },
        Column { key: "categoria", label: "Categoria" },
    ],
    fields: &[
        Field { name: "pergunta", label: "Pergunta", required: true, kind: "text" },
        Field { name: "resposta", label: "Resposta", required: true, kind: "textarea" },
        Field { name: "categoria", label: "Categoria", required: false, kind: "text" },
    ],
    placeholder_rows,
    flash_created: "Item de conhecimento criado com sucesso",
    flash_updated: "Item de conhecimento atualizado com sucesso",
    flash_deleted: "Item de conhecimento excluído com sucesso",
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
            "pergunta": "Como consulto minhas notas?",
            "resposta": "Acesse o portal do aluno e abra a aba Notas.",
            "categoria": "acadêmico",
        }),
        json!({
            "id": 2,
            "pergunta": "Qual o horário da biblioteca?",
            "resposta": "De segunda a sexta, das 7h às 22h.",
            "categoria": "campus",
        }),
    ]
}
