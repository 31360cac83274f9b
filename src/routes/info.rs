//! Static application metadata.

use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InfoResponse {
    pub app: String,
    pub description: String,
    pub author: String,
    pub repository: String,
    pub hardened: bool,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self {
            app: "Pipeline Hardening PoC".to_string(),
            description:
                "Demonstração de pipeline CI/CD hardenado com gVisor, Falco, SBOM e Cosign"
                    .to_string(),
            author: "hardened-sh".to_string(),
            repository: "https://github.com/hardened-sh/secure-pipeline-poc".to_string(),
            hardened: true,
        }
    }
}

pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}
