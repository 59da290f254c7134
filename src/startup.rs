//! Database connection lifecycle.
//!
//! The driver hands out lazy handles, so startup splits in two: `main` builds
//! the client (validating the URI) before the listener binds, and
//! `verify_or_fatal` confirms reachability afterwards. An unreachable
//! database is fatal with exit code 1 rather than a degraded mode; the
//! termination itself goes through an injectable callback so tests can
//! observe the fail-fast path without killing the test runner.

use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::{config::Config, error::AppError};

/// Builds the database client from the configured URI.
///
/// No I/O happens here beyond URI parsing; connections are opened by the
/// driver on first use. Also returns the address of the first configured
/// host for the connected-message log line.
///
/// # Returns
/// - `Ok((Client, String))` - Lazy client and the primary host address
/// - `Err(AppError)` - The URI failed to parse
pub async fn database_client(config: &Config) -> Result<(Client, String), AppError> {
    let options = ClientOptions::parse(&config.mongo_uri).await?;

    let host = options
        .hosts
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string());

    let client = Client::with_options(options)?;

    Ok((client, host))
}

/// Confirms the database is reachable by issuing a `ping` command.
///
/// Relies on the driver's own server-selection timeout; no additional
/// timeout wraps the attempt and no retry follows a failure.
pub async fn verify_connection(client: &Client, host: &str) -> Result<(), AppError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    tracing::info!("Database connected: {}", host);

    Ok(())
}

/// Fail-fast wrapper around [`verify_connection`].
///
/// On failure the error is logged and `fatal` is invoked with exit code 1.
/// Production passes `std::process::exit`; tests pass a recorder.
pub async fn verify_or_fatal(client: Client, host: String, fatal: impl FnOnce(i32)) {
    if let Err(err) = verify_connection(&client, &host).await {
        tracing::error!("Error connecting to database: {}", err);
        fatal(1);
    }
}
