//! Shared machinery for the entity CRUD screens
//!
//! Every entity screen is the same shape: a listing (backed by the API or
//! by placeholder data), a create/edit form, and POST routes that proxy to
//! the backend. Records are opaque pass-through payloads; the backend owns
//! the schemas, so forms are built from per-screen field descriptors
//! instead of typed request structs.

use crate::pages::PageError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::render_page;

use std::collections::HashMap;

use axum::response::{Html, IntoResponse, Redirect, Response};
use panel_client::{ApiClient, ClientError};
use panel_notify::FlashMessage;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Entity screens in navigation order
const NAV: [(&str, &str); 9] = [
    ("avisos", "Avisos"),
    ("professores", "Professores"),
    ("alunos", "Alunos"),
    ("cursos", "Cursos"),
    ("horarios", "Horários"),
    ("avaliacoes", "Avaliações"),
    ("conhecimento", "Base de Conhecimento"),
    ("mensagens", "Mensagens"),
    ("documentos", "Documentos"),
];

/// How the listing is obtained.
///
/// `Placeholder` marks endpoints known to be missing on the backend: the
/// API is never called and the static dataset is served. This is degraded
/// mode by policy, not an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Api,
    Placeholder,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: &'static str,
}

pub struct EntityScreen {
    pub slug: &'static str,
    pub title: &'static str,
    pub singular: &'static str,
    pub api_path: &'static str,
    pub listing: Listing,
    pub creatable: bool,
    pub columns: &'static [Column],
    pub fields: &'static [Field],
    pub placeholder_rows: fn() -> Vec<Value>,
    pub flash_created: &'static str,
    pub flash_updated: &'static str,
    pub flash_deleted: &'static str,
}

impl EntityScreen {
    fn client(&self, state: &AppState, user: &CurrentUser) -> ApiClient {
        state.api.with_token(&user.token)
    }

    /// Opaque JSON payload from the submitted form; blank fields are
    /// omitted rather than sent as empty strings.
    fn payload_from(&self, form: &HashMap<String, String>) -> Value {
        let mut map = Map::new();
        for field in self.fields {
            if let Some(value) = form
                .get(field.name)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
            {
                map.insert(field.name.to_string(), Value::String(value.to_string()));
            }
        }
        Value::Object(map)
    }

    /// Labels of required fields the form left blank
    fn missing_required(&self, form: &HashMap<String, String>) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| {
                form.get(field.name)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|field| field.label)
            .collect()
    }

    fn list_url(&self) -> String {
        format!("/{}", self.slug)
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Rows for the listing plus an optional flash when the fetch failed.
///
/// A missing listing endpoint (404) silently falls back to the placeholder
/// dataset; other failures surface a flash and still render the
/// placeholder so the screen stays usable.
async fn fetch_rows(
    state: &AppState,
    user: &CurrentUser,
    screen: &EntityScreen,
) -> (Vec<Value>, Option<FlashMessage>) {
    match screen.listing {
        Listing::Placeholder => {
            log::debug!(
                "listing endpoint for {} is known missing, serving placeholder data",
                screen.slug
            );
            ((screen.placeholder_rows)(), None)
        }
        Listing::Api => {
            let client = screen.client(state, user);
            match client.list(screen.api_path, screen.slug).await {
                Ok(rows) => (rows, None),
                Err(err) if err.is_endpoint_not_found() => {
                    log::info!(
                        "backend has no listing for {} yet, serving placeholder data",
                        screen.slug
                    );
                    ((screen.placeholder_rows)(), None)
                }
                Err(err) => {
                    log::warn!("listing {} failed: {}", screen.slug, err);
                    ((screen.placeholder_rows)(), Some(error_flash(&err)))
                }
            }
        }
    }
}

/// Render the entity screen: listing table plus the create/edit form.
///
/// `form_values` preserves what the user typed when a submission is being
/// re-rendered; `editing_id` prefills the form from the matching row.
pub async fn render_list(
    state: &AppState,
    user: &CurrentUser,
    screen: &EntityScreen,
    form_values: Option<&HashMap<String, String>>,
    editing_id: Option<&str>,
) -> Result<Html<String>, PageError> {
    let (rows, fetch_flash) = fetch_rows(state, user, screen).await;
    if let Some(flash) = fetch_flash {
        state.sessions.push_flash(&user.session_id, flash);
    }

    let editing_row = editing_id
        .and_then(|id| rows.iter().find(|row| row_id(row).as_deref() == Some(id)));

    let fields: Vec<Value> = screen
        .fields
        .iter()
        .map(|field| {
            let value = form_values
                .and_then(|values| values.get(field.name).cloned())
                .or_else(|| {
                    editing_row
                        .and_then(|row| row.get(field.name))
                        .and_then(value_to_string)
                })
                .unwrap_or_default();
            json!({
                "name": field.name,
                "label": field.label,
                "required": field.required,
                "kind": field.kind,
                "textarea": field.kind == "textarea",
                "value": value,
            })
        })
        .collect();

    let form_action = match editing_id {
        Some(id) if editing_row.is_some() => format!("/{}/{}/editar", screen.slug, id),
        _ => screen.list_url(),
    };
    let editing = editing_row.is_some();

    let data = json!({
        "title": screen.title,
        "slug": screen.slug,
        "singular": screen.singular,
        "user": user_view(user),
        "nav": nav_view(screen.slug),
        "columns": screen.columns,
        "rows": rows,
        "fields": fields,
        "creatable": screen.creatable,
        "editing": editing,
        "show_form": screen.creatable || editing,
        "form_action": form_action,
    });

    let flash = state.sessions.take_flash(&user.session_id);
    render_page(&state.templates, "entity", flash, data)
}

// =============================================================================
// Mutations
// =============================================================================

pub async fn handle_create(
    state: &AppState,
    user: &CurrentUser,
    screen: &EntityScreen,
    form: HashMap<String, String>,
) -> Result<Response, PageError> {
    if !screen.creatable {
        return Ok(Redirect::to(&screen.list_url()).into_response());
    }

    let missing = screen.missing_required(&form);
    if !missing.is_empty() {
        state
            .sessions
            .push_flash(&user.session_id, missing_fields_flash(&missing));
        let page = render_list(state, user, screen, Some(&form), None).await?;
        return Ok(page.into_response());
    }

    let client = screen.client(state, user);
    match client
        .create(screen.api_path, &screen.payload_from(&form))
        .await
    {
        Ok(_) => {
            state
                .sessions
                .push_flash(&user.session_id, FlashMessage::success(screen.flash_created));
            Ok(Redirect::to(&screen.list_url()).into_response())
        }
        Err(err) => {
            state.sessions.push_flash(&user.session_id, error_flash(&err));
            let page = render_list(state, user, screen, Some(&form), None).await?;
            Ok(page.into_response())
        }
    }
}

pub async fn handle_update(
    state: &AppState,
    user: &CurrentUser,
    screen: &EntityScreen,
    id: String,
    form: HashMap<String, String>,
) -> Result<Response, PageError> {
    let missing = screen.missing_required(&form);
    if !missing.is_empty() {
        state
            .sessions
            .push_flash(&user.session_id, missing_fields_flash(&missing));
        let page = render_list(state, user, screen, Some(&form), Some(&id)).await?;
        return Ok(page.into_response());
    }

    let client = screen.client(state, user);
    match client
        .update(screen.api_path, &id, &screen.payload_from(&form))
        .await
    {
        Ok(_) => {
            state
                .sessions
                .push_flash(&user.session_id, FlashMessage::success(screen.flash_updated));
            Ok(Redirect::to(&screen.list_url()).into_response())
        }
        Err(err) => {
            state.sessions.push_flash(&user.session_id, error_flash(&err));
            let page = render_list(state, user, screen, Some(&form), Some(&id)).await?;
            Ok(page.into_response())
        }
    }
}

pub async fn handle_delete(
    state: &AppState,
    user: &CurrentUser,
    screen: &EntityScreen,
    id: String,
) -> Response {
    let client = screen.client(state, user);
    let flash = match client.delete(screen.api_path, &id).await {
        Ok(_) => FlashMessage::success(screen.flash_deleted),
        Err(err) => error_flash(&err),
    };

    state.sessions.push_flash(&user.session_id, flash);
    Redirect::to(&screen.list_url()).into_response()
}

// =============================================================================
// Flash mapping
// =============================================================================

/// User-facing message per API client error category
pub fn error_flash(err: &ClientError) -> FlashMessage {
    match err {
        ClientError::InvalidCredentials { .. } => FlashMessage::error(
            "Sessão expirada ou sem permissão. Faça login novamente.",
        ),
        ClientError::EndpointNotFound { .. } => {
            FlashMessage::warning("Recurso indisponível no servidor no momento.")
        }
        ClientError::Validation { details, .. } => {
            let fields: Vec<String> = details
                .iter()
                .map(|detail| format!("{} ({})", detail.field, detail.message))
                .collect();
            if fields.is_empty() {
                FlashMessage::error("Dados inválidos. Revise o formulário e tente novamente.")
            } else {
                FlashMessage::error(format!("Dados inválidos: {}", fields.join(", ")))
            }
        }
        ClientError::Unreachable { .. } => FlashMessage::error(
            "Erro ao conectar com o servidor. Tente novamente mais tarde.",
        ),
        ClientError::Unresponsive { .. } => {
            FlashMessage::error("O servidor demorou para responder. Tente novamente.")
        }
        ClientError::Status { status, .. } => {
            FlashMessage::error(format!("Falha inesperada no servidor (HTTP {}).", status))
        }
        ClientError::Http { .. } => {
            FlashMessage::error("Falha de comunicação com o servidor.")
        }
        ClientError::IdentityResolution { .. } => FlashMessage::error(
            "Não foi possível identificar o usuário. Contate o administrador.",
        ),
    }
}

fn missing_fields_flash(missing: &[&'static str]) -> FlashMessage {
    FlashMessage::error(format!(
        "Preencha os campos obrigatórios: {}",
        missing.join(", ")
    ))
}

// =============================================================================
// View helpers
// =============================================================================

pub fn user_view(user: &CurrentUser) -> Value {
    json!({
        "name": user.identity.display_name,
        "email": user.identity.email,
        "role": user.identity.role,
    })
}

pub fn nav_view(active: &str) -> Value {
    let items: Vec<Value> = NAV
        .iter()
        .map(|(slug, label)| {
            json!({ "slug": slug, "label": label, "active": *slug == active })
        })
        .collect();
    json!(items)
}

/// Record ids arrive as strings or numbers depending on the endpoint
fn row_id(row: &Value) -> Option<String> {
    match row.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
