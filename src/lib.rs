//! Pipeline Hardening PoC
//!
//! A minimal HTTP service used as the payload of a hardened CI/CD pipeline.
//! Exposes a text banner on `/`, a liveness report on `/health` and static
//! application metadata on `/info`, plus a `-health` mode for
//! container health checks.

pub mod app;
pub mod build_info;
pub mod error;
pub mod health_check;
pub mod routes;
pub mod server;
pub mod settings;
pub mod telemetry;
