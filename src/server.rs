//! Listener bootstrap and graceful shutdown.

use tokio::net::TcpListener;

use crate::{app::build_router, build_info::BuildInfo, error::ServerError, settings::Settings};

/// Binds the configured port and serves until a shutdown signal arrives.
///
/// A bind failure is returned immediately; there is no retry and no fallback
/// port.
pub async fn serve(settings: &Settings, build: BuildInfo) -> Result<(), ServerError> {
    tracing::info!(port = %settings.port(), "Pipeline Hardening PoC starting");
    tracing::info!(
        version = build.version,
        commit = build.git_commit,
        "Build metadata"
    );

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve_on(listener, build).await
}

/// Serves on an already bound listener.
pub async fn serve_on(listener: TcpListener, build: BuildInfo) -> Result<(), ServerError> {
    axum::serve(listener, build_router(build))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
