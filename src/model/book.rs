//! Book domain models and parameters.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A book recommendation posted by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Database identity of the book.
    pub id: ObjectId,
    /// Book title.
    pub title: String,
    /// Short review text accompanying the recommendation.
    pub caption: String,
    /// URL of the uploaded cover image.
    pub image: String,
    /// Rating between 1 and 5.
    pub rating: i32,
    /// Identity of the user who posted the book.
    pub user_id: ObjectId,
    /// When the book was posted.
    pub created_at: DateTime<Utc>,
}

impl Book {
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id.to_hex(),
            title: self.title,
            caption: self.caption,
            image: self.image,
            rating: self.rating,
            user: self.user_id.to_hex(),
            created_at: self.created_at,
        }
    }
}

/// Book shape returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub image: String,
    pub rating: i32,
    /// Hex id of the posting user.
    pub user: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the newest-first book feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBooksDto {
    pub books: Vec<BookDto>,
    pub current_page: u64,
    pub total_books: u64,
    pub total_pages: u64,
}

/// Parameters for posting a new book.
pub struct CreateBookParam {
    pub title: String,
    pub caption: String,
    pub image: String,
    pub rating: i32,
    pub user_id: ObjectId,
}
