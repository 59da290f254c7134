//! HTTP request handlers, grouped by route module.
//!
//! Each module exposes a `router()` that the application bootstrap nests
//! under its path prefix. Handlers validate input, enforce access through the
//! auth guard, call into the data layer, and convert domain models to DTOs.

pub mod auth;
pub mod books;
