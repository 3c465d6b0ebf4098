use chrono::Utc;

use crate::domain::repository::{BookRepository, ReviewRepository, UserRepository};
use crate::domain::types::{NewReview, Review, Status};
use crate::error::CatalogServiceError;

// ── GetReviews ───────────────────────────────────────────────────────────────

pub struct GetReviewsUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> GetReviewsUseCase<R> {
    pub async fn execute(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Review>, CatalogServiceError> {
        self.repo.list(status).await
    }
}

// ── GetBookReviews ───────────────────────────────────────────────────────────

pub struct GetBookReviewsUseCase<B: BookRepository, R: ReviewRepository> {
    pub books: B,
    pub reviews: R,
}

impl<B: BookRepository, R: ReviewRepository> GetBookReviewsUseCase<B, R> {
    /// Reviews of the book with the given ISBN. An unknown ISBN yields an
    /// empty list rather than an error — listing never fails on empty.
    pub async fn execute(
        &self,
        isbn: &str,
        status: Option<Status>,
    ) -> Result<Vec<Review>, CatalogServiceError> {
        match self.books.find_by_isbn(isbn).await? {
            Some(book) => self.reviews.list_by_book_id(book.id, status).await,
            None => Ok(vec![]),
        }
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub book_isbn: String,
    pub user_id: i64,
    pub review_text: String,
}

pub struct CreateReviewUseCase<B: BookRepository, U: UserRepository, R: ReviewRepository> {
    pub books: B,
    pub users: U,
    pub reviews: R,
}

impl<B: BookRepository, U: UserRepository, R: ReviewRepository> CreateReviewUseCase<B, U, R> {
    pub async fn execute(&self, input: CreateReviewInput) -> Result<Review, CatalogServiceError> {
        let book = self
            .books
            .find_by_isbn(&input.book_isbn)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        let user = self
            .users
            .find_by_id(input.user_id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        let review = NewReview {
            book_id: book.id,
            user_id: user.id,
            review_text: input.review_text,
            // Server-assigned — the payload never carries a timestamp.
            review_date: Utc::now(),
            status: Status::Pending,
        };
        self.reviews.create(&review).await
    }
}

// ── TransitionReview ─────────────────────────────────────────────────────────

pub struct TransitionReviewUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> TransitionReviewUseCase<R> {
    /// Overwrite the review's status, with the same unguarded semantics as
    /// book transitions.
    pub async fn execute(&self, id: i64, target: Status) -> Result<Review, CatalogServiceError> {
        let mut review = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ReviewNotFound)?;
        self.repo.set_status(id, target).await?;
        review.status = target;
        Ok(review)
    }
}

// ── DeleteReview ─────────────────────────────────────────────────────────────

pub struct DeleteReviewUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> DeleteReviewUseCase<R> {
    pub async fn execute(&self, id: i64) -> Result<String, CatalogServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(CatalogServiceError::ReviewNotFound);
        }
        Ok(format!("Deleted review with ID {id}"))
    }
}
