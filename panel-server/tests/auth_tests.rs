//! Integration tests for login, logout and session handling

mod common;

use crate::common::{body_text, create_test_state, get_page, logged_in_app, mount_login};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panel_server::build_router;

#[tokio::test]
async fn test_root_redirects_to_login_without_session() {
    let backend = MockServer::start().await;
    let app = build_router(create_test_state(&backend).await);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_entity_screen_requires_session() {
    let backend = MockServer::start().await;
    let app = build_router(create_test_state(&backend).await);

    let response = app
        .oneshot(Request::builder().uri("/avisos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_login_creates_session_and_dashboard_greets_user() {
    let (_backend, app, cookie) = logged_in_app().await;

    let (status, html) = get_page(&app, "/dashboard", &cookie).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Bem-vindo, Ana"));
    assert!(html.contains("coordenador"));
}

#[tokio::test]
async fn test_login_with_wrong_password_rerenders_with_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend)
        .await;

    let app = build_router(create_test_state(&backend).await);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("email=ana@uni.br&senha=errada"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Email ou senha inválidos"));
    // typed email survives the re-render
    assert!(html.contains("value=\"ana@uni.br\""));
}

#[tokio::test]
async fn test_login_with_unreachable_backend_reports_connection_failure() {
    let backend = MockServer::start().await;
    let state = create_test_state(&backend).await;
    drop(backend);

    let app = build_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("email=ana@uni.br&senha=s3nha"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Erro ao conectar com o servidor"));
}

#[tokio::test]
async fn test_login_response_without_id_is_a_login_failure() {
    // HTTP 200 but nothing identifiable in the payload
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "mensagem": "ok"
        })))
        .mount(&backend)
        .await;

    let app = build_router(create_test_state(&backend).await);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("email=ana@uni.br&senha=s3nha"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Não foi possível identificar o usuário"));
}

#[tokio::test]
async fn test_logout_destroys_the_session() {
    let (_backend, app, cookie) = logged_in_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");

    // the old cookie no longer opens the dashboard
    let response = app
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_missing_credentials_are_rejected_before_calling_backend() {
    let backend = MockServer::start().await;
    mount_login(&backend).await;

    let app = build_router(create_test_state(&backend).await);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("email=&senha="))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Informe email e senha"));

    let requests = backend.received_requests().await.unwrap();
    assert!(requests.is_empty(), "backend must not be called");
}
