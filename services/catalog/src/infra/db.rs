use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use bookery_catalog_schema::{books, ratings, reviews, users};

use crate::domain::repository::{BookRepository, RatingRepository, ReviewRepository, UserRepository};
use crate::domain::types::{Book, BookFields, NewReview, Rating, Review, Status, User};
use crate::error::CatalogServiceError;

fn status_from_ordinal(value: i16) -> Result<Status, CatalogServiceError> {
    Status::from_ordinal(value)
        .ok_or_else(|| anyhow::anyhow!("invalid status ordinal {value} in storage").into())
}

// ── Book repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookRepository {
    pub db: Arc<DatabaseConnection>,
}

impl BookRepository for DbBookRepository {
    async fn list(&self, status: Option<Status>) -> Result<Vec<Book>, CatalogServiceError> {
        let mut query = books::Entity::find();
        if let Some(status) = status {
            query = query.filter(books::Column::Status.eq(status.ordinal()));
        }
        let models = query.all(self.db.as_ref()).await.context("list books")?;
        models.into_iter().map(book_from_model).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, CatalogServiceError> {
        let model = books::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find book by id")?;
        model.map(book_from_model).transpose()
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogServiceError> {
        // ISBN is not unique-enforced; the lowest id wins on duplicates.
        let model = books::Entity::find()
            .filter(books::Column::Isbn.eq(isbn))
            .order_by_asc(books::Column::Id)
            .one(self.db.as_ref())
            .await
            .context("find book by isbn")?;
        model.map(book_from_model).transpose()
    }

    async fn create(
        &self,
        fields: &BookFields,
        status: Status,
    ) -> Result<Book, CatalogServiceError> {
        let model = books::ActiveModel {
            title: Set(fields.title.clone()),
            author: Set(fields.author.clone()),
            genre: Set(fields.genre.clone()),
            publication_date: Set(fields.publication_date),
            isbn: Set(fields.isbn.clone()),
            description: Set(fields.description.clone()),
            status: Set(status.ordinal()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .context("create book")?;
        book_from_model(model)
    }

    async fn update_fields(
        &self,
        id: i64,
        fields: &BookFields,
    ) -> Result<(), CatalogServiceError> {
        books::ActiveModel {
            id: Set(id),
            title: Set(fields.title.clone()),
            author: Set(fields.author.clone()),
            genre: Set(fields.genre.clone()),
            publication_date: Set(fields.publication_date),
            isbn: Set(fields.isbn.clone()),
            description: Set(fields.description.clone()),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .context("update book fields")?;
        Ok(())
    }

    async fn set_status(&self, id: i64, status: Status) -> Result<(), CatalogServiceError> {
        books::ActiveModel {
            id: Set(id),
            status: Set(status.ordinal()),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .context("set book status")?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, CatalogServiceError> {
        let result = books::Entity::delete_many()
            .filter(books::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .context("delete book")?;
        Ok(result.rows_affected > 0)
    }
}

fn book_from_model(model: books::Model) -> Result<Book, CatalogServiceError> {
    Ok(Book {
        id: model.id,
        title: model.title,
        author: model.author,
        genre: model.genre,
        publication_date: model.publication_date,
        isbn: model.isbn,
        description: model.description,
        status: status_from_ordinal(model.status)?,
    })
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ReviewRepository for DbReviewRepository {
    async fn list(&self, status: Option<Status>) -> Result<Vec<Review>, CatalogServiceError> {
        let mut query = reviews::Entity::find();
        if let Some(status) = status {
            query = query.filter(reviews::Column::Status.eq(status.ordinal()));
        }
        let models = query.all(self.db.as_ref()).await.context("list reviews")?;
        models.into_iter().map(review_from_model).collect()
    }

    async fn list_by_book_id(
        &self,
        book_id: i64,
        status: Option<Status>,
    ) -> Result<Vec<Review>, CatalogServiceError> {
        let mut query = reviews::Entity::find().filter(reviews::Column::BookId.eq(book_id));
        if let Some(status) = status {
            query = query.filter(reviews::Column::Status.eq(status.ordinal()));
        }
        let models = query.all(self.db.as_ref()).await.context("list reviews by book")?;
        models.into_iter().map(review_from_model).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, CatalogServiceError> {
        let model = reviews::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find review by id")?;
        model.map(review_from_model).transpose()
    }

    async fn create(&self, review: &NewReview) -> Result<Review, CatalogServiceError> {
        let model = reviews::ActiveModel {
            book_id: Set(review.book_id),
            user_id: Set(review.user_id),
            review_text: Set(review.review_text.clone()),
            review_date: Set(review.review_date),
            status: Set(review.status.ordinal()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .context("create review")?;
        review_from_model(model)
    }

    async fn set_status(&self, id: i64, status: Status) -> Result<(), CatalogServiceError> {
        reviews::ActiveModel {
            id: Set(id),
            status: Set(status.ordinal()),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .context("set review status")?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, CatalogServiceError> {
        let result = reviews::Entity::delete_many()
            .filter(reviews::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .context("delete review")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_book_id(&self, book_id: i64) -> Result<u64, CatalogServiceError> {
        let result = reviews::Entity::delete_many()
            .filter(reviews::Column::BookId.eq(book_id))
            .exec(self.db.as_ref())
            .await
            .context("delete reviews by book")?;
        Ok(result.rows_affected)
    }
}

fn review_from_model(model: reviews::Model) -> Result<Review, CatalogServiceError> {
    Ok(Review {
        id: model.id,
        book_id: model.book_id,
        user_id: model.user_id,
        review_text: model.review_text,
        review_date: model.review_date,
        status: status_from_ordinal(model.status)?,
    })
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RatingRepository for DbRatingRepository {
    async fn list_by_book_id(&self, book_id: i64) -> Result<Vec<Rating>, CatalogServiceError> {
        let models = ratings::Entity::find()
            .filter(ratings::Column::BookId.eq(book_id))
            .all(self.db.as_ref())
            .await
            .context("list ratings by book")?;
        Ok(models.into_iter().map(rating_from_model).collect())
    }

    async fn delete_by_book_id(&self, book_id: i64) -> Result<u64, CatalogServiceError> {
        let result = ratings::Entity::delete_many()
            .filter(ratings::Column::BookId.eq(book_id))
            .exec(self.db.as_ref())
            .await
            .context("delete ratings by book")?;
        Ok(result.rows_affected)
    }
}

fn rating_from_model(model: ratings::Model) -> Rating {
    Rating {
        id: model.id,
        book_id: model.book_id,
        user_id: model.user_id,
        rating: model.rating,
        rated_at: model.rated_at,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        registered_at: model.registered_at,
    }
}
