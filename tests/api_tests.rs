//! API integration tests
//!
//! The first group drives the router in-process with `tower::ServiceExt`.
//! The `#[ignore]`d tests at the bottom hit a running server instance and
//! are meant for deployed environments (cargo test -- --ignored).

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookstore_server::{config::AppConfig, create_router, repository::BooksRepository, AppState};

/// Build a router backed by a freshly seeded catalog
fn app() -> Router {
    create_router(AppState {
        config: Arc::new(AppConfig::default()),
        books: BooksRepository::with_seed_data(),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}

#[tokio::test]
async fn list_books_returns_seeded_catalog() {
    let response = app()
        .oneshot(Request::get("/books").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let books = body.as_array().expect("Expected a JSON array");
    assert_eq!(books.len(), 4);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["title"], "Learning DevOps");
    assert_eq!(books[3]["title"], "Continuous Delivery with Docker and Jenkins");
}

#[tokio::test]
async fn get_book_by_id_returns_the_book() {
    let response = app()
        .oneshot(Request::get("/books/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Learning DevOps");
    assert_eq!(body["author"], "Mikael Krief");
    assert!(body["imageUrl"].is_string());
}

#[tokio::test]
async fn get_unknown_book_returns_404_with_empty_body() {
    let response = app()
        .oneshot(Request::get("/books/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn create_book_echoes_the_book_and_grows_the_catalog() {
    let app = app();

    let new_book = json!({
        "id": 5,
        "title": "The Phoenix Project",
        "author": "Gene Kim, Kevin Behr, George Spafford",
        "description": "A novel about IT and DevOps",
        "price": "25.50",
        "imageUrl": "https://example.org/phoenix.jpg"
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/books")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(new_book.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["title"], "The Phoenix Project");

    // The catalog now lists 5 books, the new one last
    let response = app
        .oneshot(Request::get("/books").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    let books = body.as_array().expect("Expected a JSON array");
    assert_eq!(books.len(), 5);
    assert_eq!(books[4]["id"], 5);
}

#[tokio::test]
async fn duplicate_id_is_accepted_and_lookup_returns_the_first() {
    let app = app();

    let duplicate = json!({
        "id": 1,
        "title": "Not Learning DevOps",
        "author": "Somebody Else",
        "description": "Shadowed by the seed record",
        "price": "5",
        "imageUrl": "https://example.org/other.jpg"
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/books")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(duplicate.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/books/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Learning DevOps");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::get("/books")
                .header(header::ORIGIN, "https://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

// ---------------------------------------------------------------------------
// Live smoke tests against a deployed instance
// ---------------------------------------------------------------------------

const BASE_URL: &str = "http://localhost:8080";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn live_list_books() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().map_or(false, |books| books.len() >= 4));
}

#[tokio::test]
#[ignore]
async fn live_health_check() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}
