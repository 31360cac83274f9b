//! Service configuration derived from environment variables.

use std::env;

pub const DEFAULT_PORT: &str = "8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    port: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves settings through `lookup` instead of the process environment.
    ///
    /// `PORT` is taken verbatim when non-empty. An unusable value only shows up
    /// later as a bind failure.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());

        Self { port }
    }

    pub fn for_tests() -> Self {
        Self {
            port: "0".to_string(),
        }
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Address handed to the listener: the IPv6 wildcard, which on a
    /// dual-stack host also accepts IPv4 clients.
    pub fn bind_address(&self) -> String {
        format!("[::]:{}", self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
