//! Database repository layer for all domain entities.
//!
//! Repositories own a typed collection handle and perform all reads and
//! writes for their domain. Stored record shapes are private to this layer;
//! repositories convert them to domain models at the boundary so the rest of
//! the application never sees BSON types beyond `ObjectId`.

pub mod book;
pub mod user;
