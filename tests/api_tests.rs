//! API integration tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use fntc_bot::history::Speaker;

mod common;
use common::{test_app, test_app_with, ScriptedModel};

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/chat")
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(Method::GET)
        .body(Body::empty())
        .unwrap()
}

/// Test that the health endpoint responds.
#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

/// History for an unknown user is an empty array, never an error.
#[tokio::test]
async fn test_history_unknown_user_returns_empty() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/history/ghost")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

/// Chat without a message is rejected with the fixed 400 body.
#[tokio::test]
async fn test_chat_missing_message_returns_400() {
    let app = test_app().await;

    // Other fields do not rescue the request.
    let response = app
        .oneshot(chat_request(
            json!({"userId": "u1", "history": [{"role": "user", "content": "old"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'message' or 'userId' parameter");
}

/// Chat without a userId is rejected the same way.
#[tokio::test]
async fn test_chat_missing_user_id_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(chat_request(json!({"message": "Hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing 'message' or 'userId' parameter");
}

/// Empty strings count as missing fields.
#[tokio::test]
async fn test_chat_empty_message_returns_400() {
    let app = test_app().await;

    let response = app
        .oneshot(chat_request(json!({"message": "", "userId": "u1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A first chat turn creates exactly one record holding both turns.
#[tokio::test]
async fn test_chat_persists_one_record_per_user() {
    let model = Arc::new(ScriptedModel::replying("Magandang araw din!"));
    let (app, history) = test_app_with(model.clone()).await;

    let response = app
        .oneshot(chat_request(
            json!({"message": "Magandang araw", "userId": "u1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reply"], "Magandang araw din!");
    assert!(json.get("history").is_none());

    assert_eq!(model.calls(), 1);
    assert_eq!(history.count().await.unwrap(), 1);

    let stored = history.get("u1").await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].role, Speaker::User);
    assert_eq!(stored[0].content, "Magandang araw");
    assert_eq!(stored[1].role, Speaker::Assistant);
    assert_eq!(stored[1].content, "Magandang araw din!");
}

/// A second turn updates the same record instead of inserting a new one.
#[tokio::test]
async fn test_chat_sequential_turns_accumulate() {
    let model = Arc::new(ScriptedModel::replying("Sure!"));
    let (app, history) = test_app_with(model).await;

    let first = app
        .clone()
        .oneshot(chat_request(json!({"message": "Hi", "userId": "u1"})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(chat_request(
            json!({"message": "What plans do you have?", "userId": "u1"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    assert_eq!(history.count().await.unwrap(), 1);

    let stored = history.get("u1").await.unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[0].content, "Hi");
    assert_eq!(stored[1].role, Speaker::Assistant);
    assert_eq!(stored[2].content, "What plans do you have?");
    assert_eq!(stored[3].role, Speaker::Assistant);
}

/// A model failure yields the fixed 500 body and leaves history untouched.
#[tokio::test]
async fn test_chat_model_failure_returns_500_without_write() {
    let model = Arc::new(ScriptedModel::failing());
    let (app, history) = test_app_with(model.clone()).await;

    let response = app
        .oneshot(chat_request(json!({"message": "Hello?", "userId": "u1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "The AI service encountered an error.");

    assert_eq!(model.calls(), 1);
    assert_eq!(history.count().await.unwrap(), 0);
}

/// The history endpoint serves the client schema.
#[tokio::test]
async fn test_history_returns_client_schema() {
    let model = Arc::new(ScriptedModel::replying("Hello po!"));
    let (app, _history) = test_app_with(model).await;

    let chat = app
        .clone()
        .oneshot(chat_request(json!({"message": "Hello", "userId": "u7"})))
        .await
        .unwrap();
    assert_eq!(chat.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/history/u7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"role": "user", "content": "Hello"},
            {"role": "assistant", "content": "Hello po!"}
        ])
    );
}

/// Users do not see each other's transcripts.
#[tokio::test]
async fn test_history_is_scoped_per_user() {
    let model = Arc::new(ScriptedModel::replying("Noted."));
    let (app, _history) = test_app_with(model).await;

    let chat = app
        .clone()
        .oneshot(chat_request(json!({"message": "Mine", "userId": "alice"})))
        .await
        .unwrap();
    assert_eq!(chat.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/history/bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
