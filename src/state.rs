//! Application state shared across all request handlers.
//!
//! The state is constructed once in `main` after configuration is validated,
//! then handed to the route modules at mount time through Axum's state
//! extraction. Route modules receive their dependencies explicitly instead of
//! reaching for process-wide singletons, which also makes them testable with
//! substitute handles.

use mongodb::Database;

use crate::service::token::TokenService;

/// Shared application state.
///
/// Both fields clone cheaply: `Database` shares the driver's connection
/// machinery and `TokenService` holds its keys behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the application database. The underlying driver defers all
    /// I/O until the first operation, so this exists from startup onward
    /// regardless of whether reachability has been confirmed yet.
    pub db: Database,

    /// Service for signing and verifying auth tokens.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
