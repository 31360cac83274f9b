//! Landing page banner.

pub const BANNER: &str = "
╔═══════════════════════════════════════════════════════════════════╗
║       Pipeline Hardening PoC - hardened-sh/secure-pipeline-poc    ║
╠═══════════════════════════════════════════════════════════════════╣
║  Esta aplicação demonstra um pipeline CI/CD com hardening:        ║
║                                                                   ║
║  ✓ Controle de versão com branch protection                       ║
║  ✓ Detecção de secrets com Gitleaks                               ║
║  ✓ Credenciais efêmeras via OIDC                                  ║
║  ✓ SBOM gerado com Syft                                           ║
║  ✓ Assinatura com Cosign                                          ║
║  ✓ Isolamento de runtime com gVisor                               ║
║  ✓ Monitoramento com Falco                                        ║
║                                                                   ║
║  Endpoints:                                                       ║
║    GET /         - Esta página                                    ║
║    GET /health   - Health check (JSON)                            ║
║    GET /info     - Informações da aplicação (JSON)                ║
╚═══════════════════════════════════════════════════════════════════╝
";

/// Plain-text banner. Also serves every path no other route claims.
pub async fn root() -> &'static str {
    BANNER
}
