//! Bookstore API server.
//!
//! Startup order is deliberate: configuration is validated first, the
//! keep-alive job starts before the listener binds, and database
//! reachability is confirmed only after the listener is up. Handlers hold a
//! lazy database handle for the short window before confirmation; an
//! unreachable database then terminates the process instead of leaving a
//! degraded server running.

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::token::TokenService, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let (client, host) = startup::database_client(&config).await?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database("bookstore"));
    let tokens = TokenService::new(config.jwt_secret.as_bytes());

    if let Err(err) = scheduler::keep_alive::start_scheduler(config.keep_alive_url.clone()).await {
        tracing::error!("Keep-alive scheduler error: {}", err);
    }

    let app = router::router().with_state(AppState::new(db, tokens));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|err| {
            AppError::InternalError(format!("Failed to bind port {}: {err}", config.port))
        })?;
    tracing::info!("Server running on port {}", config.port);

    // Reachability check runs after the listener is up; the server is
    // torn down with exit code 1 if the database cannot be reached.
    tokio::spawn(async move {
        startup::verify_or_fatal(client, host, |code| std::process::exit(code)).await;
    });

    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::InternalError(format!("Server error: {err}")))?;

    Ok(())
}
