use std::process::ExitCode;

use pipeline_hardening_poc::{
    build_info::BuildInfo, health_check, server, settings::Settings, telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Docker HEALTHCHECK entry point: no logging, the exit code is the answer.
    if health_check::is_health_check(std::env::args()) {
        return match health_check::run_health_check().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let build = BuildInfo::current();
    telemetry::init_tracing(&build);

    let settings = Settings::from_env();
    let result = server::serve(&settings, build).await;

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Failed to start server");
            ExitCode::FAILURE
        }
    };

    telemetry::shutdown_tracing();
    code
}
