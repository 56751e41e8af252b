#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use mathcraft_api::{config::Config, create_router, models::Question, services::AppState};

pub const SLOPE_PROMPT: &str = "What is the slope of y = 3x + 2?";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn create_app_with_config(config: Config) -> Router {
    init_tracing();
    let app_state = Arc::new(AppState::new(config).expect("Failed to initialize test app state"));
    create_router(app_state)
}

/// App backed by the built-in question bank
pub fn create_test_app() -> Router {
    create_app_with_config(Config::default())
}

/// App whose bank holds a single question with the answer "3"
pub fn create_single_question_app() -> Router {
    create_app_with_config(Config {
        questions: Some(vec![Question::new(SLOPE_PROMPT, "3")]),
        ..Config::default()
    })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).to_string())
        })
    };
    (status, json)
}

pub async fn create_session(app: &Router) -> String {
    let (status, json) = send(app, "POST", "/api/v1/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body {}", json);
    json["session_id"].as_str().unwrap().to_string()
}

pub async fn issue_question(app: &Router, session_id: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/v1/sessions/{}/question", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body {}", json);
    json
}

pub async fn answer(app: &Router, session_id: &str, answer: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/v1/sessions/{}/answers", session_id),
        Some(serde_json::json!({ "answer": answer })),
    )
    .await
}
