//! Book data repository.
//!
//! Manages the `books` collection: inserting recommendations, the paginated
//! newest-first feed, per-user listings, and deletion.

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::book::{Book, CreateBookParam},
};

/// Stored shape of a book document.
#[derive(Debug, Serialize, Deserialize)]
struct BookRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    caption: String,
    image: String,
    rating: i32,
    user_id: ObjectId,
    created_at: DateTime,
}

impl BookRecord {
    fn into_domain(self) -> Book {
        Book {
            id: self.id,
            title: self.title,
            caption: self.caption,
            image: self.image,
            rating: self.rating,
            user_id: self.user_id,
            created_at: self.created_at.to_chrono(),
        }
    }
}

/// Repository providing database operations for book recommendations.
pub struct BookRepository {
    collection: Collection<BookRecord>,
}

impl BookRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("books"),
        }
    }

    /// Inserts a new book recommendation.
    pub async fn create(&self, param: CreateBookParam) -> Result<Book, AppError> {
        let record = BookRecord {
            id: ObjectId::new(),
            title: param.title,
            caption: param.caption,
            image: param.image,
            rating: param.rating,
            user_id: param.user_id,
            created_at: DateTime::now(),
        };

        self.collection.insert_one(&record).await?;

        Ok(record.into_domain())
    }

    /// Fetches one page of the newest-first feed.
    ///
    /// # Arguments
    /// - `page` - 1-based page number
    /// - `limit` - Page size, must be positive
    ///
    /// # Returns
    /// - `Ok((Vec<Book>, u64))` - The page of books and the total count
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(&self, page: u64, limit: i64) -> Result<(Vec<Book>, u64), AppError> {
        let total = self.collection.count_documents(doc! {}).await?;

        let skip = feed_skip(page, limit);
        let records: Vec<BookRecord> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        let books = records.into_iter().map(BookRecord::into_domain).collect();

        Ok((books, total))
    }

    /// Fetches all books posted by one user, newest first.
    pub async fn get_by_user(&self, user_id: &ObjectId) -> Result<Vec<Book>, AppError> {
        let records: Vec<BookRecord> = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;

        Ok(records.into_iter().map(BookRecord::into_domain).collect())
    }

    /// Finds a book by database id.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Book>, AppError> {
        let record = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(record.map(BookRecord::into_domain))
    }

    /// Deletes a book by database id. Ownership is checked by the caller.
    pub async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(())
    }
}

/// Number of documents to skip for a 1-based page. Page values come straight
/// from the query string, so both bounds saturate instead of wrapping.
fn feed_skip(page: u64, limit: i64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit as u64)
}
