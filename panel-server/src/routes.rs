use crate::pages::{
    auth, courses, dashboard, documents, evaluations, knowledge, messages, notices, professors,
    schedules, students,
};
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

/// Build the application router with every screen
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(auth::index))
        .route("/login", get(auth::login_form).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
        // Entity screens: list + create on the collection, POST routes for
        // mutation since HTML forms only speak GET/POST
        .route("/avisos", get(notices::list).post(notices::create))
        .route("/avisos/{id}/editar", post(notices::update))
        .route("/avisos/{id}/excluir", post(notices::delete))
        .route("/professores", get(professors::list).post(professors::create))
        .route("/professores/{id}/editar", post(professors::update))
        .route("/professores/{id}/excluir", post(professors::delete))
        .route("/alunos", get(students::list).post(students::create))
        .route("/alunos/{id}/editar", post(students::update))
        .route("/alunos/{id}/excluir", post(students::delete))
        .route("/cursos", get(courses::list).post(courses::create))
        .route("/cursos/{id}/editar", post(courses::update))
        .route("/cursos/{id}/excluir", post(courses::delete))
        .route("/horarios", get(schedules::list).post(schedules::create))
        .route("/horarios/{id}/editar", post(schedules::update))
        .route("/horarios/{id}/excluir", post(schedules::delete))
        .route("/avaliacoes", get(evaluations::list).post(evaluations::create))
        .route("/avaliacoes/{id}/editar", post(evaluations::update))
        .route("/avaliacoes/{id}/excluir", post(evaluations::delete))
        .route("/conhecimento", get(knowledge::list).post(knowledge::create))
        .route("/conhecimento/{id}/editar", post(knowledge::update))
        .route("/conhecimento/{id}/excluir", post(knowledge::delete))
        .route("/mensagens", get(messages::list))
        .route("/mensagens/{id}/editar", post(messages::update))
        .route("/mensagens/{id}/excluir", post(messages::delete))
        .route("/documentos", get(documents::list).post(documents::create))
        .route("/documentos/{id}/editar", post(documents::update))
        .route("/documentos/{id}/excluir", post(documents::delete))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
