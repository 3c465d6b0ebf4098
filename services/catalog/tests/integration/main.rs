mod api_test;
mod book_test;
mod review_test;
