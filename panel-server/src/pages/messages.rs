//! Student message inbox
//!
//! Messages are created by students through the chatbot, never by the
//! panel; staff can list them, record a reply, or delete them. The edit
//! operation is the reply.

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
    slug: "mensagens",
    title: "Mensagens",
    singular: "Mensagem",
    api_path: "/mensagens",
    listing: Listing::Api,
    creatable: false,
    columns: &[
        Column { key: "id", label: "#" },
        Column { key: "aluno", label: "Aluno" },
        Column { key: "mensagem", label: "Mensagem" },
        Column { key: "resposta", label: "Resposta" },
    ],
    fields: &[
        Field { name: "resposta", label: "Resposta", required: true, kind: "textarea" },
    ],
    placeholder_rows,
    flash_created: "Mensagem registrada com sucesso",
    flash_updated: "Mensagem respondida com sucesso",
    flash_deleted: "Mensagem excluída com sucesso",
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
            "aluno": "Mariana Alves",
            "mensagem": "O chatbot não soube responder sobre a rematrícula.",
            "resposta": "",
        }),
        json!({
            "id": 2,
            "aluno": "João Pedro Lima",
            "mensagem": "Como solicito segunda chamada de prova?",
            "resposta": "Encaminhado à coordenação.",
        }),
    ]
}
