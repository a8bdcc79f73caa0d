//! Server configuration.

use std::env;
use std::path::PathBuf;

/// Listening host. Not configurable.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Listening port. Not configurable.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Explicit page template path.
    pub template_path: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: var("DATABASE_URL"),
            template_path: var("TODO_TEMPLATE_PATH").map(PathBuf::from),
            log_level: var("TODO_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
