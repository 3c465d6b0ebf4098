use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase};

use bookery_catalog::router::build_router;
use bookery_catalog::state::AppState;
use bookery_catalog_schema::books;

fn server_with(db: sea_orm::DatabaseConnection) -> TestServer {
    TestServer::new(build_router(AppState { db: db.into() })).unwrap()
}

fn book_model(id: i64, isbn: &str, status: i16) -> books::Model {
    books::Model {
        id,
        title: "The Atlas of Elsewhere".to_owned(),
        author: "Ursula Vernon".to_owned(),
        genre: "Fantasy".to_owned(),
        publication_date: NaiveDate::from_ymd_opt(2019, 5, 7).unwrap(),
        isbn: isbn.to_owned(),
        description: "A field guide to imaginary places".to_owned(),
        status,
    }
}

#[tokio::test]
async fn health_endpoints_respond_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = server_with(db);

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn get_books_serializes_status_as_lowercase_strings() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            book_model(1, "ISBN-1", 0),
            book_model(2, "ISBN-2", 1),
        ]])
        .into_connection();
    let server = server_with(db);

    let response = server.get("/books").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["status"], "pending");
    assert_eq!(body[1]["status"], "approved");
    assert_eq!(body[1]["isbn"], "ISBN-2");
}

#[tokio::test]
async fn get_book_by_unknown_isbn_returns_typed_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<books::Model>::new()])
        .into_connection();
    let server = server_with(db);

    let response = server.get("/books/by-isbn/ISBN-MISSING").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "BOOK_NOT_FOUND");
    assert_eq!(body["message"], "book not found");
}

#[tokio::test]
async fn get_books_with_invalid_status_filter_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = server_with(db);

    let response = server.get("/books").add_query_param("status", "bogus").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_book_title_projects_title_only() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![book_model(1, "ISBN-1", 1)]])
        .into_connection();
    let server = server_with(db);

    let response = server.get("/books/by-isbn/ISBN-1/title").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "title": "The Atlas of Elsewhere" }));
}
