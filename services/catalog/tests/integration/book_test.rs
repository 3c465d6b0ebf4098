use chrono::Utc;

use bookery_catalog::domain::repository::BookRepository;
use bookery_catalog::domain::types::{NewBook, Rating, Review, Status};
use bookery_catalog::error::CatalogServiceError;
use bookery_catalog::usecase::book::{
    CreateBookUseCase, DeleteBookUseCase, GetBookByIsbnUseCase, GetBooksUseCase,
    TransitionBookUseCase, UpdateBookUseCase,
};

use crate::helpers::{
    InMemoryBookRepo, InMemoryRatingRepo, InMemoryReviewRepo, book_fields, test_book,
};

fn new_book(isbn: &str, status: Option<Status>) -> NewBook {
    let f = book_fields("The Atlas of Elsewhere", isbn);
    NewBook {
        title: f.title,
        author: f.author,
        genre: f.genre,
        publication_date: f.publication_date,
        isbn: f.isbn,
        description: f.description,
        status,
    }
}

#[tokio::test]
async fn should_walk_book_through_full_moderation_lifecycle() {
    let books = InMemoryBookRepo::default();

    // Create with no explicit status — must come back pending.
    let created = CreateBookUseCase {
        repo: books.clone(),
    }
    .execute(new_book("ISBN-1", None))
    .await
    .unwrap();
    assert_eq!(created.status, Status::Pending);

    // Approve it.
    let approved = TransitionBookUseCase {
        repo: books.clone(),
    }
    .execute(created.id, Status::Approved)
    .await
    .unwrap();
    assert_eq!(approved.status, Status::Approved);

    // It now shows up in the approved listing.
    let listed = GetBooksUseCase {
        repo: books.clone(),
    }
    .execute(Some(Status::Approved))
    .await
    .unwrap();
    assert_eq!(listed.iter().map(|b| b.id).collect::<Vec<_>>(), vec![created.id]);

    // Delete it; the ISBN lookup must then fail.
    DeleteBookUseCase {
        books: books.clone(),
        reviews: InMemoryReviewRepo::default(),
        ratings: InMemoryRatingRepo::default(),
    }
    .execute(created.id)
    .await
    .unwrap();

    let result = GetBookByIsbnUseCase { repo: books }.execute("ISBN-1").await;
    assert!(matches!(result, Err(CatalogServiceError::BookNotFound)));
}

#[tokio::test]
async fn should_cascade_delete_reviews_and_ratings_of_book() {
    let books = InMemoryBookRepo::with(vec![
        test_book(1, "ISBN-1", Status::Approved),
        test_book(2, "ISBN-2", Status::Approved),
    ]);
    let reviews = InMemoryReviewRepo::default();
    let ratings = InMemoryRatingRepo::default();
    reviews.reviews.lock().unwrap().extend([
        Review {
            id: 1,
            book_id: 1,
            user_id: 10,
            review_text: "Wonderful".to_owned(),
            review_date: Utc::now(),
            status: Status::Approved,
        },
        Review {
            id: 2,
            book_id: 1,
            user_id: 11,
            review_text: "Dull".to_owned(),
            review_date: Utc::now(),
            status: Status::Rejected,
        },
        Review {
            id: 3,
            book_id: 2,
            user_id: 10,
            review_text: "Unrelated".to_owned(),
            review_date: Utc::now(),
            status: Status::Pending,
        },
    ]);
    ratings.ratings.lock().unwrap().extend([
        Rating {
            id: 1,
            book_id: 1,
            user_id: 10,
            rating: 5,
            rated_at: Utc::now(),
        },
        Rating {
            id: 2,
            book_id: 2,
            user_id: 11,
            rating: 2,
            rated_at: Utc::now(),
        },
    ]);

    DeleteBookUseCase {
        books: books.clone(),
        reviews: reviews.clone(),
        ratings: ratings.clone(),
    }
    .execute(1)
    .await
    .unwrap();

    assert!(books.find_by_id(1).await.unwrap().is_none());
    let surviving_reviews = reviews.reviews.lock().unwrap();
    assert_eq!(surviving_reviews.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
    let surviving_ratings = ratings.ratings.lock().unwrap();
    assert_eq!(surviving_ratings.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
}

#[tokio::test]
async fn should_keep_status_across_full_field_update() {
    let books = InMemoryBookRepo::with(vec![test_book(1, "ISBN-1", Status::Rejected)]);

    let updated = UpdateBookUseCase {
        repo: books.clone(),
    }
    .execute(1, book_fields("A New Name Entirely", "ISBN-1-REV"))
    .await
    .unwrap();

    assert_eq!(updated.title, "A New Name Entirely");
    assert_eq!(updated.isbn, "ISBN-1-REV");
    assert_eq!(updated.status, Status::Rejected, "update must not touch status");
}

#[tokio::test]
async fn should_report_not_found_for_unknown_ids_across_operations() {
    let books = InMemoryBookRepo::default();

    let update = UpdateBookUseCase {
        repo: books.clone(),
    }
    .execute(404, book_fields("Ghost", "ISBN-404"))
    .await;
    assert!(matches!(update, Err(CatalogServiceError::BookNotFound)));

    let transition = TransitionBookUseCase {
        repo: books.clone(),
    }
    .execute(404, Status::Rejected)
    .await;
    assert!(matches!(transition, Err(CatalogServiceError::BookNotFound)));

    let delete = DeleteBookUseCase {
        books,
        reviews: InMemoryReviewRepo::default(),
        ratings: InMemoryRatingRepo::default(),
    }
    .execute(404)
    .await;
    assert!(matches!(delete, Err(CatalogServiceError::BookNotFound)));
}

#[tokio::test]
async fn should_filter_listing_by_status_regardless_of_insertion_order() {
    let books = InMemoryBookRepo::with(vec![
        test_book(3, "ISBN-3", Status::Approved),
        test_book(1, "ISBN-1", Status::Rejected),
        test_book(2, "ISBN-2", Status::Approved),
    ]);
    let uc = GetBooksUseCase { repo: books };

    let approved = uc.execute(Some(Status::Approved)).await.unwrap();
    let mut ids: Vec<_> = approved.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3]);

    let pending = uc.execute(Some(Status::Pending)).await.unwrap();
    assert!(pending.is_empty());
}
