use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use bookery_core::health::{healthz, readyz};

use crate::handlers::{
    book::{
        approve_book, create_book, delete_book, get_book_by_isbn, get_book_ratings,
        get_book_title, get_books, reject_book, update_book,
    },
    review::{
        approve_review, create_review, delete_review, get_book_reviews, get_reviews,
        reject_review,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Books
        .route("/books", get(get_books))
        .route("/books", post(create_book))
        .route("/books/by-isbn/{isbn}", get(get_book_by_isbn))
        .route("/books/by-isbn/{isbn}/title", get(get_book_title))
        .route("/books/by-isbn/{isbn}/ratings", get(get_book_ratings))
        .route("/books/by-isbn/{isbn}/reviews", get(get_book_reviews))
        .route("/books/{id}", put(update_book))
        .route("/books/{id}/approve", post(approve_book))
        .route("/books/{id}/reject", post(reject_book))
        .route("/books/{id}", delete(delete_book))
        // Reviews
        .route("/reviews", get(get_reviews))
        .route("/reviews", post(create_review))
        .route("/reviews/{id}/approve", post(approve_review))
        .route("/reviews/{id}/reject", post(reject_review))
        .route("/reviews/{id}", delete(delete_review))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
