use bookery_catalog::error::CatalogServiceError;
use bookery_catalog::domain::types::Status;
use bookery_catalog::usecase::review::{
    CreateReviewInput, CreateReviewUseCase, DeleteReviewUseCase, GetBookReviewsUseCase,
    GetReviewsUseCase, TransitionReviewUseCase,
};

use crate::helpers::{
    InMemoryBookRepo, InMemoryReviewRepo, InMemoryUserRepo, test_book, test_user,
};

fn create_input(isbn: &str, user_id: i64) -> CreateReviewInput {
    CreateReviewInput {
        book_isbn: isbn.to_owned(),
        user_id,
        review_text: "A review of substance".to_owned(),
    }
}

#[tokio::test]
async fn should_moderate_review_from_creation_to_rejection() {
    let books = InMemoryBookRepo::with(vec![test_book(1, "ISBN-1", Status::Approved)]);
    let users = InMemoryUserRepo::with(vec![test_user(10)]);
    let reviews = InMemoryReviewRepo::default();

    let created = CreateReviewUseCase {
        books: books.clone(),
        users,
        reviews: reviews.clone(),
    }
    .execute(create_input("ISBN-1", 10))
    .await
    .unwrap();
    assert_eq!(created.status, Status::Pending);

    let transition = TransitionReviewUseCase {
        repo: reviews.clone(),
    };
    let approved = transition.execute(created.id, Status::Approved).await.unwrap();
    assert_eq!(approved.status, Status::Approved);

    // Unguarded overwrite: approved → rejected is allowed and sticks.
    let rejected = transition.execute(created.id, Status::Rejected).await.unwrap();
    assert_eq!(rejected.status, Status::Rejected);

    let listed = GetReviewsUseCase {
        repo: reviews.clone(),
    }
    .execute(Some(Status::Rejected))
    .await
    .unwrap();
    assert_eq!(listed.iter().map(|r| r.id).collect::<Vec<_>>(), vec![created.id]);

    let by_book = GetBookReviewsUseCase { books, reviews }
        .execute("ISBN-1", Some(Status::Approved))
        .await
        .unwrap();
    assert!(by_book.is_empty(), "no approved reviews remain for the book");
}

#[tokio::test]
async fn should_distinguish_book_and_user_not_found_on_create() {
    let books = InMemoryBookRepo::with(vec![test_book(1, "ISBN-1", Status::Approved)]);
    let users = InMemoryUserRepo::with(vec![test_user(10)]);

    let uc = CreateReviewUseCase {
        books,
        users,
        reviews: InMemoryReviewRepo::default(),
    };

    let missing_book = uc.execute(create_input("ISBN-NOPE", 10)).await;
    assert!(matches!(missing_book, Err(CatalogServiceError::BookNotFound)));

    let missing_user = uc.execute(create_input("ISBN-1", 404)).await;
    assert!(matches!(missing_user, Err(CatalogServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_allow_multiple_reviews_per_user() {
    // The per-record user reference does not enforce one review per user.
    let books = InMemoryBookRepo::with(vec![
        test_book(1, "ISBN-1", Status::Approved),
        test_book(2, "ISBN-2", Status::Approved),
    ]);
    let users = InMemoryUserRepo::with(vec![test_user(10)]);
    let reviews = InMemoryReviewRepo::default();

    let uc = CreateReviewUseCase {
        books,
        users,
        reviews: reviews.clone(),
    };
    let first = uc.execute(create_input("ISBN-1", 10)).await.unwrap();
    let second = uc.execute(create_input("ISBN-2", 10)).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(reviews.reviews.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_delete_review_and_report_unknown_id() {
    let books = InMemoryBookRepo::with(vec![test_book(1, "ISBN-1", Status::Approved)]);
    let users = InMemoryUserRepo::with(vec![test_user(10)]);
    let reviews = InMemoryReviewRepo::default();

    let created = CreateReviewUseCase {
        books,
        users,
        reviews: reviews.clone(),
    }
    .execute(create_input("ISBN-1", 10))
    .await
    .unwrap();

    let uc = DeleteReviewUseCase {
        repo: reviews.clone(),
    };
    let message = uc.execute(created.id).await.unwrap();
    assert_eq!(message, format!("Deleted review with ID {}", created.id));

    let again = uc.execute(created.id).await;
    assert!(matches!(again, Err(CatalogServiceError::ReviewNotFound)));
}
