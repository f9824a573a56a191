//! Runtime configuration for lexid.
//!
//! Everything comes from the environment: one variable for the listening
//! port and one override for the upstream dictionary API base URL.

use crate::dictionary;
use tracing::warn;

/// Environment variable selecting the listening port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable overriding the upstream API base URL.
pub const UPSTREAM_VAR: &str = "LEXID_UPSTREAM";

fn default_port() -> u16 {
    3000
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to
    pub port: u16,

    /// Base URL of the upstream dictionary API
    pub upstream_base: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Never fails: an unusable port value falls back to the default
    /// with a warning.
    pub fn load() -> Self {
        Self {
            port: parse_port(std::env::var(PORT_VAR).ok()),
            upstream_base: std::env::var(UPSTREAM_VAR)
                .unwrap_or_else(|_| dictionary::DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            upstream_base: dictionary::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Parse a port value from the environment, falling back to the default.
fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        None => default_port(),
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(
                "Invalid {} value {:?}, using default {}",
                PORT_VAR,
                value,
                default_port()
            );
            default_port()
        }),
    }
}
