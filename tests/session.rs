mod common;
use axum::http::StatusCode;
use learnpath::model::{SessionStage, SessionStore};
use learnpath::web::dto::session::SessionResponse;
use learnpath::web::middlewares::SESSION_COOKIE;
use learnpath::{Config, auth};
use tower_cookies::{Cookie, cookie::SameSite};

use crate::common::{
    Action, Flow, setup_server, setup_server_with_store, start_session_action,
    submit_diagnostic_action,
};

#[tokio::test]
async fn route_session_start_test() {
    let mut server = setup_server().await;

    Flow::new()
        .step(
            start_session_action()
                .assert_cookie(SESSION_COOKIE, |cookie| {
                    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
                    assert_eq!(cookie.path(), Some("/"));
                    assert_eq!(cookie.http_only(), Some(true));
                })
                .assert_body(|body| {
                    let session: SessionResponse =
                        serde_json::from_str(body).expect("Invalid body format");
                    assert_eq!(session.stage, SessionStage::Diagnostic);
                    assert_eq!(session.progress, 0);
                    assert!(!session.project_unlocked);
                    assert!(!session.diagnostic_completed);
                    assert!(!session.premium_unlocked);
                }),
        )
        .step(Action::new("session_get", "GET", "/api/v1/session").assert_body(|body| {
            let session: SessionResponse = serde_json::from_str(body).expect("Invalid body format");
            assert_eq!(session.stage, SessionStage::Diagnostic);
        }))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_session_required_test() {
    let mut server = setup_server().await;

    Flow::new()
        .step(
            Action::new("session_get", "GET", "/api/v1/session")
                .with_expect(StatusCode::UNAUTHORIZED)
                .assert_body(|body| assert!(body.contains("Session error"))),
        )
        .step(Action::new("path_get", "GET", "/api/v1/path").with_expect(StatusCode::UNAUTHORIZED))
        .step(Action::new("project_get", "GET", "/api/v1/project").with_expect(StatusCode::UNAUTHORIZED))
        // plan catalogue is public
        .step(Action::new("plans", "GET", "/api/v1/payment/plans"))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_session_garbage_cookie_test() {
    let server = setup_server().await;

    server
        .get("/api/v1/session")
        .add_cookie(Cookie::new(SESSION_COOKIE, "not-a-jwt"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn route_session_delete_test() {
    let mut server = setup_server().await;
    server.do_not_save_cookies();

    let started = server.post("/api/v1/session/start").await;
    started.assert_status(StatusCode::CREATED);
    let token = started.cookie(SESSION_COOKIE).value().to_string();

    server
        .delete("/api/v1/session")
        .add_cookie(Cookie::new(SESSION_COOKIE, token.clone()))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // the token still verifies, but its session is gone
    server
        .get("/api/v1/session")
        .add_cookie(Cookie::new(SESSION_COOKIE, token))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn route_sessions_are_isolated_test() {
    let mut server = setup_server().await;
    server.do_not_save_cookies();

    let first = server.post("/api/v1/session/start").await;
    let first = first.cookie(SESSION_COOKIE).value().to_string();
    let second = server.post("/api/v1/session/start").await;
    let second = second.cookie(SESSION_COOKIE).value().to_string();

    server
        .post("/api/v1/path/modules/m1/complete")
        .add_cookie(Cookie::new(SESSION_COOKIE, first))
        .await
        .assert_status_ok();

    let other = server
        .get("/api/v1/session")
        .add_cookie(Cookie::new(SESSION_COOKIE, second))
        .await
        .json::<SessionResponse>();
    assert_eq!(other.progress, 0);
}

#[tokio::test]
async fn route_diagnostic_test() {
    let mut server = setup_server().await;

    Flow::new()
        .step(start_session_action())
        .step(
            Action::new("diagnostic_get", "GET", "/api/v1/diagnostic")
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| assert!(body.contains("diagnostic not found"))),
        )
        .step(submit_diagnostic_action().assert_body(|body| {
            let profile: serde_json::Value = serde_json::from_str(body).unwrap();
            assert_eq!(profile["name"], "Ana");
            assert_eq!(profile["skills"].as_array().unwrap().len(), 2);
        }))
        .step(Action::new("diagnostic_get", "GET", "/api/v1/diagnostic").assert_body(|body| {
            assert!(body.contains("finance"));
        }))
        .step(Action::new("session_get", "GET", "/api/v1/session").assert_body(|body| {
            let session: SessionResponse = serde_json::from_str(body).unwrap();
            assert_eq!(session.stage, SessionStage::Learning);
            assert!(session.diagnostic_completed);
        }))
        // blank names are rejected
        .step(
            Action::new("diagnostic_blank", "PUT", "/api/v1/diagnostic")
                .with_body(serde_json::json!({
                    "name": "   ",
                    "years_experience": 1,
                    "industry": "other",
                    "budget": "free_only",
                }))
                .with_expect(StatusCode::BAD_REQUEST),
        )
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_session_start_registers_token_subject_test() {
    let store = SessionStore::new();
    let mut server = setup_server_with_store(store.clone()).await;
    server.do_not_save_cookies();

    let started = server.post("/api/v1/session/start").await;
    started.assert_status(StatusCode::CREATED);
    let token = started.cookie(SESSION_COOKIE).value().to_string();

    let secret = Config::get_or_init(true).await.app().session_secret();
    let claims = auth::process_token(&token, secret).unwrap().claims;
    let id = claims.sub.parse::<uuid::Uuid>().unwrap();

    assert_eq!(store.len().await, 1);
    assert!(store.get(id).await.is_some());
    assert_eq!(started.json::<SessionResponse>().id, id);
}
