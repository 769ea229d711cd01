//! End-to-end tests for the HTTP API against the in-memory repository.
#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use book_service::db::repositories::LocalRepository;
use book_service::db::repository::BookRepository;
use book_service::http::{create_router, AppState};

fn test_app() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn BookRepository>;
    create_router(AppState::new(repo))
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_book(app: &Router, name: &str) -> Value {
    let (status, body) = send_json(app, "POST", "/book", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_returns_201_with_id_and_name() {
    let app = test_app();

    let book = create_book(&app, "The Great Gatsby").await;

    assert!(book["id"].as_i64().unwrap() > 0);
    assert_eq!(book["name"], "The Great Gatsby");
}

#[tokio::test]
async fn test_create_accepts_missing_name() {
    let app = test_app();

    let (status, body) = send_json(&app, "POST", "/book", Some(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
}

#[tokio::test]
async fn test_list_defaults_to_first_page_of_ten() {
    let app = test_app();
    for i in 0..15 {
        create_book(&app, &format!("Book {}", i)).await;
    }

    let (status, body) = send_json(&app, "GET", "/book", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["name"], "Book 0");
}

#[tokio::test]
async fn test_list_pagination_query_parameters() {
    let app = test_app();
    for i in 0..7 {
        create_book(&app, &format!("Book {}", i)).await;
    }

    let (status, body) = send_json(&app, "GET", "/book?page=2&limit=3", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["name"], "Book 3");
}

#[tokio::test]
async fn test_list_with_extreme_page_returns_empty_page() {
    let app = test_app();
    create_book(&app, "Only book").await;

    let uri = format!("/book?page={}&limit=10", i64::MAX);
    let (status, body) = send_json(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_name_filter_is_case_insensitive() {
    let app = test_app();
    create_book(&app, "The Great Gatsby").await;
    create_book(&app, "Moby Dick").await;
    create_book(&app, "GATSBY companion").await;

    let (status, body) = send_json(&app, "GET", "/book?name=gatsby", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    for book in data {
        assert!(book["name"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("gatsby"));
    }
}

#[tokio::test]
async fn test_update_replaces_name_and_keeps_id() {
    let app = test_app();
    let created = create_book(&app, "Working title").await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/book/{}", id),
        Some(json!({ "name": "Final title" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["name"], "Final title");
}

#[tokio::test]
async fn test_update_missing_book_returns_404_without_side_effects() {
    let app = test_app();
    create_book(&app, "Untouched").await;

    let (status, _) = send_json(
        &app,
        "PATCH",
        "/book/9999",
        Some(json!({ "name": "Ignored" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send_json(&app, "GET", "/book", None).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Untouched");
}

#[tokio::test]
async fn test_delete_returns_confirmation_and_deleted_book() {
    let app = test_app();
    let created = create_book(&app, "Doomed").await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send_json(&app, "DELETE", &format!("/book/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted successfully");
    assert_eq!(body["deletedBook"]["id"].as_i64().unwrap(), id);
    assert_eq!(body["deletedBook"]["name"], "Doomed");
}

#[tokio::test]
async fn test_deleted_book_is_gone_and_second_delete_is_404() {
    let app = test_app();
    let created = create_book(&app, "Ephemeral").await;
    let id = created["id"].as_i64().unwrap();

    send_json(&app, "DELETE", &format!("/book/{}", id), None).await;

    let (list_status, list_body) = send_json(&app, "GET", "/book", None).await;
    assert_eq!(list_status, StatusCode::OK);
    assert!(list_body["data"].as_array().unwrap().is_empty());

    let (status, body) = send_json(&app, "DELETE", &format!("/book/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_endpoint_reports_connected_store() {
    let app = test_app();

    let (status, body) = send_json(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_openapi_json_is_served() {
    let app = test_app();

    let (status, body) = send_json(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/book").is_some());
    assert!(body["paths"].get("/book/{id}").is_some());
}
