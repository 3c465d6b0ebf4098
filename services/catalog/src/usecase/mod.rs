pub mod book;
pub mod review;
