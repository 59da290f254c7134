//! Domain models and API DTOs.
//!
//! Domain models are what the data layer returns and the handlers work with;
//! DTOs are the JSON shapes sent to clients. Conversion happens at the
//! controller boundary via `into_dto`.

pub mod api;
pub mod book;
pub mod user;
