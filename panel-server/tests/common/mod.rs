#![allow(dead_code)]

//! Test infrastructure for panel-server integration tests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panel_server::{AppState, build_router};

/// AppState wired to a mocked backend
pub async fn create_test_state(backend: &MockServer) -> AppState {
    let mut config = panel_config::Config::default();
    config.api.base_url = backend.uri();
    config.api.timeout_secs = 2;

    AppState::from_config(config).expect("failed to build test state")
}

/// Mount a happy-path login response on the mocked backend
pub async fn mount_login(backend: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "usuario": { "id_coordenador": 1, "nome": "Ana", "tipo": "coordenador" }
        })))
        .mount(backend)
        .await;
}

/// POST /login and return the session cookie for follow-up requests
pub async fn login(app: &Router, email: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("email={}&senha=s3nha", email)))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");

    response
        .headers()
        .get("set-cookie")
        .expect("login should set the session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// GET a page with the session cookie and return the rendered HTML
pub async fn get_page(app: &Router, uri: &str, cookie: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// POST an urlencoded form with the session cookie
pub async fn post_form(
    app: &Router,
    uri: &str,
    cookie: &str,
    body: &str,
) -> axum::http::Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("cookie", cookie)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: axum::http::Response<axum::body::Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Backend + router + logged-in session in one step
pub async fn logged_in_app() -> (MockServer, Router, String) {
    let backend = MockServer::start().await;
    mount_login(&backend).await;

    let state = create_test_state(&backend).await;
    let app = build_router(state);
    let cookie = login(&app, "ana@uni.br").await;

    (backend, app, cookie)
}
