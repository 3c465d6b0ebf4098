use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Moderation status of a book or review.
///
/// Transitions are unguarded overwrites: any status may be set from any
/// other, so re-approving an approved entity is a no-op rather than an
/// error. Stored as its ordinal in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl Status {
    pub fn ordinal(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Option<Self> {
        match value {
            0 => Some(Self::Pending),
            1 => Some(Self::Approved),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Pending
    }
}

/// A catalogued book with its moderation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub description: String,
    pub status: Status,
}

/// Payload for creating a book. A missing status defaults to pending at
/// creation time; a supplied one is preserved as-is.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub description: String,
    pub status: Option<Status>,
}

/// Replacement fields for a book update. Status is absent by construction —
/// it only changes through the approve/reject transitions.
#[derive(Debug, Clone)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub description: String,
}

/// A review of a book, referencing its parent book and author by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub review_text: String,
    pub review_date: DateTime<Utc>,
    pub status: Status,
}

/// Payload for creating a review (already resolved to internal keys).
#[derive(Debug, Clone)]
pub struct NewReview {
    pub book_id: i64,
    pub user_id: i64,
    pub review_text: String,
    pub review_date: DateTime<Utc>,
    pub status: Status,
}

/// A rating of a book. `user_id` is a weak reference to the external
/// user subsystem. Ratings have no moderation lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub rating: i64,
    pub rated_at: DateTime<Utc>,
}

/// A user profile, owned by an external identity subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}
