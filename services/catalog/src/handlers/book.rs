use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Book, BookFields, NewBook, Rating, Status};
use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::book::{
    CreateBookUseCase, DeleteBookUseCase, GetBookByIsbnUseCase, GetBookRatingsUseCase,
    GetBookTitleUseCase, GetBooksUseCase, TransitionBookUseCase, UpdateBookUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub description: String,
    pub status: Status,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            publication_date: book.publication_date,
            isbn: book.isbn,
            description: book.description,
            status: book.status,
        }
    }
}

#[derive(Serialize)]
pub struct RatingResponse {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub rating: i64,
    #[serde(serialize_with = "bookery_core::serde::to_rfc3339_ms")]
    pub rated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            book_id: rating.book_id,
            user_id: rating.user_id,
            rating: rating.rating,
            rated_at: rating.rated_at,
        }
    }
}

#[derive(Serialize)]
pub struct TitleResponse {
    pub title: String,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct StatusQuery {
    pub status: Option<Status>,
}

// ── GET /books ───────────────────────────────────────────────────────────────

pub async fn get_books(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<BookResponse>>, CatalogServiceError> {
    let uc = GetBooksUseCase {
        repo: state.book_repo(),
    };
    let books = uc.execute(query.status).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

// ── GET /books/by-isbn/{isbn} ────────────────────────────────────────────────

pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BookResponse>, CatalogServiceError> {
    let uc = GetBookByIsbnUseCase {
        repo: state.book_repo(),
    };
    let book = uc.execute(&isbn).await?;
    Ok(Json(book.into()))
}

// ── GET /books/by-isbn/{isbn}/title ──────────────────────────────────────────

pub async fn get_book_title(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<TitleResponse>, CatalogServiceError> {
    let uc = GetBookTitleUseCase {
        repo: state.book_repo(),
    };
    let title = uc.execute(&isbn).await?;
    Ok(Json(TitleResponse { title }))
}

// ── GET /books/by-isbn/{isbn}/ratings ────────────────────────────────────────

pub async fn get_book_ratings(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Vec<RatingResponse>>, CatalogServiceError> {
    let uc = GetBookRatingsUseCase {
        books: state.book_repo(),
        ratings: state.rating_repo(),
    };
    let ratings = uc.execute(&isbn).await?;
    Ok(Json(ratings.into_iter().map(RatingResponse::from).collect()))
}

// ── POST /books ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub description: String,
    #[serde(default)]
    pub status: Option<Status>,
}

pub async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), CatalogServiceError> {
    let uc = CreateBookUseCase {
        repo: state.book_repo(),
    };
    let created = uc
        .execute(NewBook {
            title: body.title,
            author: body.author,
            genre: body.genre,
            publication_date: body.publication_date,
            isbn: body.isbn,
            description: body.description,
            status: body.status,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

// ── PUT /books/{id} ──────────────────────────────────────────────────────────

/// Update payload. Carries no status field — a status supplied by the client
/// is ignored during deserialization, so updates can never change it.
#[derive(Deserialize)]
pub struct UpdateBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub description: String,
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateBookRequest>,
) -> Result<Json<BookResponse>, CatalogServiceError> {
    let uc = UpdateBookUseCase {
        repo: state.book_repo(),
    };
    let updated = uc
        .execute(
            id,
            BookFields {
                title: body.title,
                author: body.author,
                genre: body.genre,
                publication_date: body.publication_date,
                isbn: body.isbn,
                description: body.description,
            },
        )
        .await?;
    Ok(Json(updated.into()))
}

// ── POST /books/{id}/approve · POST /books/{id}/reject ──────────────────────

pub async fn approve_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, CatalogServiceError> {
    let uc = TransitionBookUseCase {
        repo: state.book_repo(),
    };
    let book = uc.execute(id, Status::Approved).await?;
    Ok(Json(book.into()))
}

pub async fn reject_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookResponse>, CatalogServiceError> {
    let uc = TransitionBookUseCase {
        repo: state.book_repo(),
    };
    let book = uc.execute(id, Status::Rejected).await?;
    Ok(Json(book.into()))
}

// ── DELETE /books/{id} ───────────────────────────────────────────────────────

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let uc = DeleteBookUseCase {
        books: state.book_repo(),
        reviews: state.review_repo(),
        ratings: state.rating_repo(),
    };
    let message = uc.execute(id).await?;
    Ok(Json(MessageResponse { message }))
}
