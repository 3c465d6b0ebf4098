#![allow(async_fn_in_trait)]

use crate::domain::types::{Book, BookFields, NewReview, Rating, Review, Status, User};
use crate::error::CatalogServiceError;

/// Repository for books.
pub trait BookRepository: Send + Sync {
    /// All books, or only those with the given status.
    async fn list(&self, status: Option<Status>) -> Result<Vec<Book>, CatalogServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, CatalogServiceError>;

    /// ISBN is not unique-enforced; duplicates resolve to the lowest id.
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogServiceError>;

    /// Insert a book and return it with its assigned id.
    async fn create(
        &self,
        fields: &BookFields,
        status: Status,
    ) -> Result<Book, CatalogServiceError>;

    /// Replace the non-status fields of a book row.
    async fn update_fields(
        &self,
        id: i64,
        fields: &BookFields,
    ) -> Result<(), CatalogServiceError>;

    /// Overwrite the status of a book row.
    async fn set_status(&self, id: i64, status: Status) -> Result<(), CatalogServiceError>;

    /// Delete a book row. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, CatalogServiceError>;
}

/// Repository for reviews.
pub trait ReviewRepository: Send + Sync {
    async fn list(&self, status: Option<Status>) -> Result<Vec<Review>, CatalogServiceError>;

    async fn list_by_book_id(
        &self,
        book_id: i64,
        status: Option<Status>,
    ) -> Result<Vec<Review>, CatalogServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, CatalogServiceError>;

    /// Insert a review and return it with its assigned id.
    async fn create(&self, review: &NewReview) -> Result<Review, CatalogServiceError>;

    /// Overwrite the status of a review row.
    async fn set_status(&self, id: i64, status: Status) -> Result<(), CatalogServiceError>;

    /// Delete a review row. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, CatalogServiceError>;

    /// Delete all reviews of a book. Returns the number of rows deleted.
    async fn delete_by_book_id(&self, book_id: i64) -> Result<u64, CatalogServiceError>;
}

/// Repository for ratings (read plus cascade delete — ratings are created
/// outside this service).
pub trait RatingRepository: Send + Sync {
    async fn list_by_book_id(&self, book_id: i64) -> Result<Vec<Rating>, CatalogServiceError>;

    /// Delete all ratings of a book. Returns the number of rows deleted.
    async fn delete_by_book_id(&self, book_id: i64) -> Result<u64, CatalogServiceError>;
}

/// Repository for users (read-only — users are owned externally).
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, CatalogServiceError>;
}
