use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

/// Starts the keep-alive scheduler.
///
/// Free hosting tiers spin instances down after a period without traffic;
/// this job sends a GET to the deployment's own URL every 14 minutes to stay
/// inside the idle window. When no URL is configured the job runs but does
/// nothing.
///
/// Job failures are logged and never propagate; the bootstrap calls this
/// exactly once, before the listener binds.
///
/// # Arguments
/// - `keep_alive_url`: URL to ping, from the `API_URL` environment variable
pub async fn start_scheduler(keep_alive_url: Option<String>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_url = keep_alive_url.clone();

    // Every 14 minutes
    let job = Job::new_async("0 */14 * * * *", move |_uuid, _lock| {
        let url = job_url.clone();

        Box::pin(async move {
            if let Err(e) = ping(url.as_deref()).await {
                tracing::error!("Keep-alive request failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Keep-alive scheduler started");

    Ok(())
}

async fn ping(url: Option<&str>) -> Result<(), reqwest::Error> {
    let Some(url) = url else {
        tracing::debug!("API_URL not set, skipping keep-alive ping");
        return Ok(());
    };

    let response = reqwest::get(url).await?;
    tracing::info!("Keep-alive ping sent, status {}", response.status());

    Ok(())
}
