//! Infrastructure services used by the controllers.
//!
//! - `token` - signing and verification of bearer tokens
//! - `password` - argon2 hashing and verification on blocking threads

pub mod password;
pub mod token;
