//! sea-orm entities for the catalog service.

pub mod books;
pub mod ratings;
pub mod reviews;
pub mod users;
