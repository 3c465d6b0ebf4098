use crate::domain::repository::{BookRepository, RatingRepository, ReviewRepository};
use crate::domain::types::{Book, BookFields, NewBook, Rating, Status};
use crate::error::CatalogServiceError;

// ── GetBooks ─────────────────────────────────────────────────────────────────

pub struct GetBooksUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> GetBooksUseCase<R> {
    pub async fn execute(
        &self,
        status: Option<Status>,
    ) -> Result<Vec<Book>, CatalogServiceError> {
        self.repo.list(status).await
    }
}

// ── GetBookByIsbn ────────────────────────────────────────────────────────────

pub struct GetBookByIsbnUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> GetBookByIsbnUseCase<R> {
    pub async fn execute(&self, isbn: &str) -> Result<Book, CatalogServiceError> {
        self.repo
            .find_by_isbn(isbn)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)
    }
}

// ── GetBookTitle ─────────────────────────────────────────────────────────────

pub struct GetBookTitleUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> GetBookTitleUseCase<R> {
    pub async fn execute(&self, isbn: &str) -> Result<String, CatalogServiceError> {
        let book = self
            .repo
            .find_by_isbn(isbn)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        Ok(book.title)
    }
}

// ── GetBookRatings ───────────────────────────────────────────────────────────

pub struct GetBookRatingsUseCase<B: BookRepository, R: RatingRepository> {
    pub books: B,
    pub ratings: R,
}

impl<B: BookRepository, R: RatingRepository> GetBookRatingsUseCase<B, R> {
    pub async fn execute(&self, isbn: &str) -> Result<Vec<Rating>, CatalogServiceError> {
        let book = self
            .books
            .find_by_isbn(isbn)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        self.ratings.list_by_book_id(book.id).await
    }
}

// ── CreateBook ───────────────────────────────────────────────────────────────

pub struct CreateBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> CreateBookUseCase<R> {
    pub async fn execute(&self, input: NewBook) -> Result<Book, CatalogServiceError> {
        // A caller-supplied status wins; otherwise new books start pending.
        let status = input.status.unwrap_or_default();
        let fields = BookFields {
            title: input.title,
            author: input.author,
            genre: input.genre,
            publication_date: input.publication_date,
            isbn: input.isbn,
            description: input.description,
        };
        self.repo.create(&fields, status).await
    }
}

// ── UpdateBook ───────────────────────────────────────────────────────────────

pub struct UpdateBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> UpdateBookUseCase<R> {
    pub async fn execute(
        &self,
        id: i64,
        fields: BookFields,
    ) -> Result<Book, CatalogServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        self.repo.update_fields(id, &fields).await?;
        Ok(Book {
            id,
            title: fields.title,
            author: fields.author,
            genre: fields.genre,
            publication_date: fields.publication_date,
            isbn: fields.isbn,
            description: fields.description,
            // Status only changes through the approve/reject transitions.
            status: existing.status,
        })
    }
}

// ── TransitionBook ───────────────────────────────────────────────────────────

pub struct TransitionBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> TransitionBookUseCase<R> {
    /// Overwrite the book's status. Unguarded: any prior status is allowed,
    /// so repeating a transition is idempotent.
    pub async fn execute(&self, id: i64, target: Status) -> Result<Book, CatalogServiceError> {
        let mut book = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        self.repo.set_status(id, target).await?;
        book.status = target;
        Ok(book)
    }
}

// ── DeleteBook ───────────────────────────────────────────────────────────────

pub struct DeleteBookUseCase<B: BookRepository, Rv: ReviewRepository, Rt: RatingRepository> {
    pub books: B,
    pub reviews: Rv,
    pub ratings: Rt,
}

impl<B: BookRepository, Rv: ReviewRepository, Rt: RatingRepository> DeleteBookUseCase<B, Rv, Rt> {
    /// Delete a book together with everything it owns. The cascade is an
    /// explicit step here: children go first, then the parent row.
    pub async fn execute(&self, id: i64) -> Result<String, CatalogServiceError> {
        let book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)?;
        let reviews = self.reviews.delete_by_book_id(book.id).await?;
        let ratings = self.ratings.delete_by_book_id(book.id).await?;
        self.books.delete(book.id).await?;
        tracing::info!(book_id = book.id, reviews, ratings, "deleted book with children");
        Ok(format!("Deleted book with ID {id}"))
    }
}
