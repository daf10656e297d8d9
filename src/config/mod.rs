//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::{env, time::Duration};

use crate::error::AppError;

/// Default HTTP listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default per-query provider timeout.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL. `None` when not configured.
    pub rpc_url: Option<String>,
    /// Address the HTTP server listens on.
    pub bind_addr: String,
    /// Timeout applied to every provider query.
    pub rpc_timeout: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RPC_URL`: Ethereum JSON-RPC endpoint. Missing is not fatal here;
    ///   balance requests report it instead.
    /// - `BIND_ADDR`: HTTP listen address (default: 0.0.0.0:3000)
    /// - `RPC_TIMEOUT_SECS`: provider query timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let rpc_url = lookup("RPC_URL").map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let rpc_timeout = match lookup("RPC_TIMEOUT_SECS") {
            None => defaults.rpc_timeout,
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("Invalid RPC_TIMEOUT_SECS '{}': {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(AppError::Config("RPC_TIMEOUT_SECS must be greater than zero".into()));
                }
                Duration::from_secs(secs)
            }
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self { rpc_url, bind_addr, rpc_timeout, log_level })
    }
}
