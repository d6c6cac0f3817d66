//! Session lifecycle against a mocked backend: restore, login, logout.

#![allow(clippy::unwrap_used)]

mod common;

use common::gateway;
use serde_json::json;
use stayfinder_client::session::Credentials;
use stayfinder_client::{Error, MemoryTokenStore, SessionController, TokenStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn restore_populates_session_from_persisted_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("x-auth-token", "tok-persisted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "name": "Ana",
            "email": "ana@example.com",
            "isHost": false,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("tok-persisted");
    let mut controller = SessionController::new(gateway(&server), store);
    controller.restore().await.unwrap();

    assert!(controller.is_authenticated());
    assert_eq!(controller.current_user().unwrap().id, "u1");
    assert_eq!(controller.session().unwrap().token(), "tok-persisted");
}

#[tokio::test]
async fn restore_purges_rejected_token_and_stays_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"msg": "Token is not valid"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("tok-stale");
    let mut controller = SessionController::new(gateway(&server), store);
    controller.restore().await.unwrap();

    assert!(!controller.is_authenticated());
    // The invalid token was purged from persistent storage.
    assert_eq!(controller.store().load().unwrap(), None);
}

#[tokio::test]
async fn restore_without_persisted_token_makes_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = SessionController::new(gateway(&server), MemoryTokenStore::new());
    controller.restore().await.unwrap();
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn login_failure_surfaces_server_body_unchanged() {
    let server = MockServer::start().await;
    let body = json!({"msg": "Invalid credentials"});
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&body))
        .mount(&server)
        .await;

    let mut controller = SessionController::new(gateway(&server), MemoryTokenStore::new());
    let err = controller
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        Error::Auth { body } => assert_eq!(body, r#"{"msg":"Invalid credentials"}"#),
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn login_persists_token_and_logout_purges_it_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-fresh",
            "user": {"id": "u1", "name": "Ana", "email": "ana@example.com", "isHost": true},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = SessionController::new(gateway(&server), MemoryTokenStore::new());
    controller
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        controller.store().load().unwrap(),
        Some("tok-fresh".to_string())
    );

    controller.logout();
    assert!(!controller.is_authenticated());
    assert_eq!(controller.store().load().unwrap(), None);
}
