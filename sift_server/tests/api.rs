//! End-to-end tests for the HTTP routes, driven through `tower::ServiceExt`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sift_server::{AppState, router};
use sift_store::{MemoryStore, StringService};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(StringService::new(Arc::new(
        MemoryStore::new(),
    ))))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should not fail");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let body = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri)
        .body(Body::empty())
        .expect("request should build")
}

fn post_raw(body: &str) -> Request<Body> {
    Request::post("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn post(body: &Value) -> Request<Body> {
    post_raw(&body.to_string())
}

async fn create(app: &Router, value: &str) {
    let (status, _) = send(app, post(&json!({ "value": value }))).await;
    assert_eq!(status, StatusCode::CREATED);
}

fn values(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .map(|data| data.iter().filter_map(|r| r["value"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_create_returns_full_record() {
    let app = app();
    let (status, body) = send(&app, post(&json!({"value": "Racecar"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], "Racecar");
    assert_eq!(body["length"], 7);
    assert_eq!(body["is_palindrome"], true);
    assert_eq!(body["unique_characters"], 5);
    assert_eq!(body["word_count"], 1);
    assert_eq!(body["id"], body["sha256_hash"]);
    assert_eq!(body["character_frequency_map"]["a"], 2);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_duplicate_conflicts() {
    let app = app();
    create(&app, "hello").await;

    let (status, body) = send(&app, post(&json!({"value": "hello"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "String already exists in the system");
}

#[tokio::test]
async fn test_create_missing_value_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, post(&json!({"text": "hello"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Missing \"value\" field");

    let (status, _) = send(&app, post_raw("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_non_string_value_is_unprocessable() {
    let app = app();
    for body in [json!({"value": 42}), json!({"value": null})] {
        let (status, body) = send(&app, post(&body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["detail"],
            "Invalid data type for \"value\" (must be string)"
        );
    }
}

#[tokio::test]
async fn test_retrieve_and_delete() {
    let app = app();
    create(&app, "level").await;

    let (status, body) = send(&app, get("/strings/level")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "level");

    let (status, body) = send(&app, delete("/strings/level")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, get("/strings/level")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "String does not exist in the system");

    let (status, _) = send(&app, delete("/strings/level")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_retrieve_percent_encoded_value() {
    let app = app();
    create(&app, "a man/a plan").await;

    let (status, body) = send(&app, get("/strings/a%20man%2Fa%20plan")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "a man/a plan");
    assert_eq!(body["word_count"], 3);
}

#[tokio::test]
async fn test_list_with_filters() {
    let app = app();
    for value in ["racecar", "hello world", "noon", "abc"] {
        create(&app, value).await;
    }

    let (status, body) = send(&app, get("/strings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["filters_applied"], json!({}));

    let (status, body) = send(&app, get("/strings?is_palindrome=true&min_length=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(values(&body), vec!["racecar"]);
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["filters_applied"],
        json!({"is_palindrome": true, "min_length": 5})
    );

    let (_, body) = send(&app, get("/strings?word_count=2&contains_character=w")).await;
    assert_eq!(values(&body), vec!["hello world"]);
}

#[tokio::test]
async fn test_list_rejects_bad_parameters() {
    let app = app();
    for uri in [
        "/strings?is_palindrome=maybe",
        "/strings?min_length=abc",
        "/strings?max_length=-1",
        "/strings?contains_character=ab",
        "/strings?min_length=10&max_length=2",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["detail"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn test_natural_language_query() {
    let app = app();
    for value in ["racecar", "noon", "hello world", "a"] {
        create(&app, value).await;
    }

    let (status, body) = send(
        &app,
        get("/strings/filter-by-natural-language?query=all%20single%20word%20palindromic%20strings"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(values(&body), vec!["racecar", "noon", "a"]);
    assert_eq!(
        body["interpreted_query"]["original"],
        "all single word palindromic strings"
    );
    assert_eq!(
        body["interpreted_query"]["parsed_filters"],
        json!({"word_count": 1, "is_palindrome": true})
    );

    let (_, body) = send(
        &app,
        get("/strings/filter-by-natural-language?query=strings%20longer%20than%204%20characters"),
    )
    .await;
    assert_eq!(values(&body), vec!["racecar", "hello world"]);
}

#[tokio::test]
async fn test_natural_language_errors() {
    let app = app();

    let (status, body) = send(&app, get("/strings/filter-by-natural-language")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Missing query parameter");

    let (status, body) = send(&app, get("/strings/filter-by-natural-language?query=foo")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Unable to parse natural language query");
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let app = app();
    create(&app, "one").await;
    create(&app, "two").await;

    let (status, body) = send(&app, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "records": 2}));
}

#[tokio::test]
async fn test_retrieve_and_delete_value_with_slash() {
    let app = app();
    create(&app, "a/b").await;

    let (status, body) = send(&app, get("/strings/a/b")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "a/b");

    let (status, _) = send(&app, delete("/strings/a/b")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get("/strings/a/b")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_path_has_detail() {
    let app = app();
    create(&app, "").await;

    for uri in ["/strings/", "/nowhere"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["detail"], "String does not exist in the system", "{uri}");
    }
}

#[tokio::test]
async fn test_list_repeated_parameter_uses_last_value() {
    let app = app();
    for value in ["ab", "abcd", "abcdef"] {
        create(&app, value).await;
    }

    let (status, body) = send(&app, get("/strings?min_length=1&min_length=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(values(&body), vec!["abcdef"]);
    assert_eq!(body["filters_applied"], json!({"min_length": 5}));
}
