//! HTTP route handlers.

mod health;
mod info;
mod root;

pub use health::{health, HealthResponse};
pub use info::{info, InfoResponse};
pub use root::{root, BANNER};
