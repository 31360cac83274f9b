//! Health endpoint.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::build_info::BuildInfo;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub build_time: String,
    pub git_commit: String,
    /// Toolchain the binary was built with. The key name is part of the
    /// public response shape consumed by existing probes and dashboards.
    #[serde(rename = "go_version")]
    pub runtime_version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy(build: &BuildInfo) -> Self {
        Self {
            status: "healthy".to_string(),
            version: build.version.to_string(),
            build_time: build.build_time.to_string(),
            git_commit: build.git_commit.to_string(),
            runtime_version: build.runtime_version.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Any method on `/health`.
///
/// Liveness only: if the process can answer, it is healthy.
pub async fn health(State(build): State<BuildInfo>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&build))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let response = HealthResponse::healthy(&BuildInfo::current());
        assert!(response.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let build = BuildInfo {
            version: "1.2.3",
            build_time: "2024-01-01T00:00:00Z",
            git_commit: "abc123",
            runtime_version: "rustc 1.90.0",
        };
        let json = serde_json::to_value(HealthResponse::healthy(&build)).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], "1.2.3");
        assert_eq!(json["build_time"], "2024-01-01T00:00:00Z");
        assert_eq!(json["git_commit"], "abc123");
        assert_eq!(json["go_version"], "rustc 1.90.0");
        assert!(json.get("runtime_version").is_none());
    }
}
