//! Router construction for the PoC HTTP API.

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::{build_info::BuildInfo, routes};

pub fn build_router(build: BuildInfo) -> Router {
    Router::new()
        .route("/", any(routes::root))
        .route("/health", any(routes::health))
        .route("/info", any(routes::info))
        .fallback(routes::root)
        .layer(TraceLayer::new_for_http())
        .with_state(build)
}
