//! Error types for the server and health-check mode.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HealthCheckError {
    #[error("health request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("health endpoint answered {0}")]
    Unhealthy(StatusCode),
}
