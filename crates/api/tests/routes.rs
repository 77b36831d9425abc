//! Drives the full router with in-memory state.

use std::sync::Arc;

use api::{router, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use database::{seed, user, Database, NewUser, PoolSettings};
use mock_provider::{FailingProvider, StaticProvider};
use provider_core::CodeProvider;
use serde_json::{json, Value};
use tower::ServiceExt;

const REVERSE_PROMPT: &str = "Write a function to reverse a string";
const REVERSE_CODE: &str = "def reverse(s):\n    return s[::-1]";

async fn test_db() -> Database {
    let settings = PoolSettings {
        min_connections: 1,
        idle_timeout: None,
        ..PoolSettings::default()
    };
    let db = Database::connect_with("sqlite::memory:", &settings)
        .await
        .unwrap();
    db.migrate().await.unwrap();
    seed::seed_languages(db.pool(), seed::DEFAULT_LANGUAGES)
        .await
        .unwrap();
    db
}

async fn app_with(provider: Arc<dyn CodeProvider>) -> (Router, Database) {
    let db = test_db().await;
    (router(AppState::new(db.clone(), provider)), db)
}

async fn app() -> (Router, Database) {
    app_with(Arc::new(StaticProvider::new(REVERSE_CODE))).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn history_total(app: &Router) -> u64 {
    let (_, body) = get(app, "/api/history").await;
    body["data"]["pagination"]["totalItems"].as_u64().unwrap()
}

#[tokio::test]
async fn test_index_and_health() {
    let (app, _db) = app().await;

    let (status, body) = get(&app, "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["endpoints"]["generate"], "POST /api/generate");

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API is running");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, _db) = app().await;

    let (status, body) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_languages_sorted_by_name() {
    let (app, _db) = app().await;

    let (status, body) = get(&app, "/api/languages").await;
    assert_eq!(status, StatusCode::OK);

    let languages = body["data"].as_array().unwrap();
    assert_eq!(languages.len(), seed::DEFAULT_LANGUAGES.len());

    let names: Vec<&str> = languages
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let python = languages.iter().find(|l| l["name"] == "Python").unwrap();
    assert_eq!(python["extension"], ".py");
    assert!(python["id"].is_i64());

    let (_, again) = get(&app, "/api/languages").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_generate_created() {
    let (app, _db) = app().await;

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": REVERSE_PROMPT, "language": "Python"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert!(data["id"].is_i64());
    assert_eq!(data["prompt"], REVERSE_PROMPT);
    assert_eq!(data["language"], "Python");
    assert_eq!(data["code"], REVERSE_CODE);
    assert!(data["createdAt"].is_string());
    assert!(data["user"].is_null());
    assert!(data.get("extension").is_none());
}

#[tokio::test]
async fn test_generate_with_user_id_forms() {
    let (app, db) = app().await;
    let carol = user::create_user(
        db.pool(),
        &NewUser {
            username: "carol".into(),
            email: "carol@example.com".into(),
        },
    )
    .await
    .unwrap();

    for user_id in [json!(carol.id), json!(carol.id.to_string())] {
        let (status, body) = post_json(
            &app,
            "/api/generate",
            json!({"prompt": REVERSE_PROMPT, "language": "Go", "userId": user_id}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["data"]["user"],
            json!({"username": "carol", "email": "carol@example.com"})
        );
    }

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": REVERSE_PROMPT, "language": "Go", "userId": null}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["user"].is_null());
}

#[tokio::test]
async fn test_generate_short_prompt() {
    let (app, _db) = app().await;

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": "hi", "language": "Python"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e.as_str().unwrap().contains("between 10 and 5000")));
    assert_eq!(history_total(&app).await, 0);
}

#[tokio::test]
async fn test_generate_reports_every_rule() {
    let (app, _db) = app().await;

    let (status, body) = post_json(&app, "/api/generate", json!({"userId": "abc"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "Prompt is required",
            "Language is required",
            "User ID must be an integer"
        ])
    );
}

#[tokio::test]
async fn test_generate_unsupported_language() {
    let (app, _db) = app().await;

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": REVERSE_PROMPT, "language": "Brainfuck--"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Brainfuck--"));
    assert!(error.contains("not supported"));
    assert_eq!(history_total(&app).await, 0);
}

#[tokio::test]
async fn test_generate_unknown_user() {
    let (app, _db) = app().await;

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": REVERSE_PROMPT, "language": "Python", "userId": 404}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user ID");
}

#[tokio::test]
async fn test_generate_malformed_json() {
    let (app, _db) = app().await;

    let request = Request::post("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"prompt\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_provider_failure() {
    let provider = Arc::new(FailingProvider::new("upstream 500"));
    let (app, _db) = app_with(provider.clone()).await;

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": REVERSE_PROMPT, "language": "Python"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to generate code using AI service");
    assert!(!body.to_string().contains("upstream 500"));
    assert_eq!(provider.calls(), 1);
    assert_eq!(history_total(&app).await, 0);
}

#[tokio::test]
async fn test_history_pagination() {
    let (app, _db) = app().await;

    for i in 0..25 {
        let (status, _) = post_json(
            &app,
            "/api/generate",
            json!({"prompt": format!("Generated program number {}", i), "language": "Rust"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/history?page=1&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["generations"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["data"]["pagination"],
        json!({
            "currentPage": 1,
            "totalPages": 3,
            "totalItems": 25,
            "itemsPerPage": 10,
            "hasNextPage": true,
            "hasPreviousPage": false
        })
    );
    assert_eq!(
        body["data"]["generations"][0]["prompt"],
        "Generated program number 24"
    );

    let (_, beyond) = get(&app, "/api/history?page=4&limit=10").await;
    assert!(beyond["data"]["generations"].as_array().unwrap().is_empty());
    assert_eq!(beyond["data"]["pagination"]["hasNextPage"], false);
    assert_eq!(beyond["data"]["pagination"]["hasPreviousPage"], true);

    let (_, filtered) = get(&app, "/api/history?language=Python").await;
    assert_eq!(filtered["data"]["pagination"]["totalItems"], 0);

    let (_, again) = get(&app, "/api/history?page=1&limit=10").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_history_invalid_params() {
    let (app, _db) = app().await;

    let (status, body) = get(&app, "/api/history?page=0&limit=51").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Page must be a positive integer", "Limit must be between 1 and 50"])
    );

    let (status, body) = get(&app, "/api/history?userId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["User ID must be an integer"]));
}

#[tokio::test]
async fn test_history_rejected_query_is_json() {
    let (app, _db) = app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/api/history?page=1&page=2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid query string");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_history_page_too_large() {
    let (app, _db) = app().await;

    let (status, body) = get(&app, "/api/history?page=4294967296").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["Page must not exceed 4294967295"]));
}

#[tokio::test]
async fn test_generate_integral_float_user_id() {
    let (app, db) = app().await;
    let dave = user::create_user(
        db.pool(),
        &NewUser {
            username: "dave".into(),
            email: "dave@example.com".into(),
        },
    )
    .await
    .unwrap();

    let body = format!(
        r#"{{"prompt": "{}", "language": "Go", "userId": {}.0}}"#,
        REVERSE_PROMPT, dave.id
    );
    let request = Request::post("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["username"], "dave");

    let (status, body) = post_json(
        &app,
        "/api/generate",
        json!({"prompt": REVERSE_PROMPT, "language": "Go", "userId": 1.5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["User ID must be an integer"]));
}
