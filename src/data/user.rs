//! User data repository.
//!
//! Manages the `users` collection: account creation during registration and
//! the lookups used by login and the auth guard. Uniqueness of email and
//! username is checked by the registration flow before insert.

use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Stored shape of a user document.
#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
    email: String,
    password: String,
    profile_image: String,
    created_at: DateTime,
}

impl UserRecord {
    fn into_domain(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password,
            profile_image: self.profile_image,
            created_at: self.created_at.to_chrono(),
        }
    }
}

/// Repository providing database operations for user accounts.
pub struct UserRepository {
    collection: Collection<UserRecord>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Inserts a new user account.
    ///
    /// # Arguments
    /// - `param` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated id
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let record = UserRecord {
            id: ObjectId::new(),
            username: param.username,
            email: param.email,
            password: param.password_hash,
            profile_image: param.profile_image,
            created_at: DateTime::now(),
        };

        self.collection.insert_one(&record).await?;

        Ok(record.into_domain())
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let record = self.collection.find_one(doc! { "email": email }).await?;

        Ok(record.map(UserRecord::into_domain))
    }

    /// Finds a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let record = self
            .collection
            .find_one(doc! { "username": username })
            .await?;

        Ok(record.map(UserRecord::into_domain))
    }

    /// Finds a user by database id. Used by the auth guard to resolve the
    /// account a token refers to.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let record = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(record.map(UserRecord::into_domain))
    }
}
