use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Review, Status};
use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::handlers::book::StatusQuery;
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewInput, CreateReviewUseCase, DeleteReviewUseCase, GetBookReviewsUseCase,
    GetReviewsUseCase, TransitionReviewUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub review_text: String,
    #[serde(serialize_with = "bookery_core::serde::to_rfc3339_ms")]
    pub review_date: chrono::DateTime<chrono::Utc>,
    pub status: Status,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            book_id: review.book_id,
            user_id: review.user_id,
            review_text: review.review_text,
            review_date: review.review_date,
            status: review.status,
        }
    }
}

// ── GET /reviews ─────────────────────────────────────────────────────────────

pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<ReviewResponse>>, CatalogServiceError> {
    let uc = GetReviewsUseCase {
        repo: state.review_repo(),
    };
    let reviews = uc.execute(query.status).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

// ── GET /books/by-isbn/{isbn}/reviews ────────────────────────────────────────

pub async fn get_book_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<ReviewResponse>>, CatalogServiceError> {
    let uc = GetBookReviewsUseCase {
        books: state.book_repo(),
        reviews: state.review_repo(),
    };
    let reviews = uc.execute(&isbn, query.status).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

// ── POST /reviews ────────────────────────────────────────────────────────────

/// Review creation resolves the reviewer by internal numeric user id.
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub book_isbn: String,
    pub user_id: i64,
    pub review_text: String,
}

pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), CatalogServiceError> {
    let uc = CreateReviewUseCase {
        books: state.book_repo(),
        users: state.user_repo(),
        reviews: state.review_repo(),
    };
    let created = uc
        .execute(CreateReviewInput {
            book_isbn: body.book_isbn,
            user_id: body.user_id,
            review_text: body.review_text,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

// ── POST /reviews/{id}/approve · POST /reviews/{id}/reject ──────────────────

pub async fn approve_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReviewResponse>, CatalogServiceError> {
    let uc = TransitionReviewUseCase {
        repo: state.review_repo(),
    };
    let review = uc.execute(id, Status::Approved).await?;
    Ok(Json(review.into()))
}

pub async fn reject_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReviewResponse>, CatalogServiceError> {
    let uc = TransitionReviewUseCase {
        repo: state.review_repo(),
    };
    let review = uc.execute(id, Status::Rejected).await?;
    Ok(Json(review.into()))
}

// ── DELETE /reviews/{id} ─────────────────────────────────────────────────────

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let uc = DeleteReviewUseCase {
        repo: state.review_repo(),
    };
    let message = uc.execute(id).await?;
    Ok(Json(MessageResponse { message }))
}
