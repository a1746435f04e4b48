//! Page-level errors
//!
//! API-facing failures never reach this type; route handlers convert them
//! to flash messages. What remains is the truly unexpected, which gets
//! logged with full context and answered with a generic failure page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

const FAILURE_PAGE: &str = r#"<!doctype html>
<html lang="pt-br"><head><meta charset="utf-8"><title>Falha inesperada</title></head>
<body><h1>Falha inesperada</h1>
<p>Ocorreu um erro inesperado no painel. Tente novamente; se persistir, contate o administrador.</p>
<p><a href="/dashboard">Voltar ao painel</a></p></body></html>"#;

#[derive(Error, Debug)]
pub enum PageError {
    /// No live session behind the request
    #[error("not authenticated")]
    Unauthenticated,

    /// Template rendering failed
    #[error("template rendering failed: {source}")]
    Render {
        #[source]
        source: handlebars::RenderError,
    },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Unauthenticated => Redirect::to("/login").into_response(),
            PageError::Render { ref source } => {
                log::error!("unexpected page failure: {} ({:?})", self, source);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_PAGE)).into_response()
            }
        }
    }
}
