//! Health-check mode for container liveness probes.
//!
//! Runs as a separate short-lived process next to the server: one GET against
//! the local health route, mapped to an exit code by the caller.

use std::time::Duration;

use reqwest::StatusCode;

use crate::error::HealthCheckError;

/// First command-line argument that selects health-check mode.
pub const HEALTH_FLAG: &str = "-health";

/// Always the default port, whatever `PORT` the server was started with.
pub const LOCAL_HEALTH_URL: &str = "http://localhost:8080/health";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn is_health_check<I>(mut args: I) -> bool
where
    I: Iterator<Item = String>,
{
    args.nth(1).as_deref() == Some(HEALTH_FLAG)
}

/// Issues a single GET to `url`; only a 200 counts as healthy.
pub async fn check_health(url: &str, timeout: Duration) -> Result<(), HealthCheckError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(HealthCheckError::Unhealthy(status))
    }
}

pub async fn run_health_check() -> Result<(), HealthCheckError> {
    check_health(LOCAL_HEALTH_URL, REQUEST_TIMEOUT).await
}
