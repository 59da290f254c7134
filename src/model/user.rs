//! User domain models and parameters.
//!
//! Provides the user domain model with credentials and profile data, the DTO
//! shape returned to clients (which never carries the password hash), and the
//! parameter type used for account creation during registration.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Application user with credentials and profile data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database identity of the user.
    pub id: ObjectId,
    /// Unique display name.
    pub username: String,
    /// Unique email address used for login.
    pub email: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    /// URL of the user's generated avatar.
    pub profile_image: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash stays behind; the id is rendered as its hex form.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id.to_hex(),
            username: self.username,
            email: self.email,
            profile_image: self.profile_image,
            created_at: self.created_at,
        }
    }
}

/// User shape returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile_image: String,
    pub created_at: DateTime<Utc>,
}

/// Successful register/login response: a signed token plus the user it
/// belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthDto {
    pub token: String,
    pub user: UserDto,
}

/// Parameters for creating a new user account.
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_image: String,
}
