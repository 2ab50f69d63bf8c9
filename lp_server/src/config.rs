//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration. CLI arguments take precedence over environment
//! variables, which take precedence over the built-in defaults.

use live_poker::constants::{DEFAULT_NUM_TABLES, DEFAULT_TICK_INTERVAL_SECS};
use std::{net::SocketAddr, time::Duration};

/// Complete server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Number of simulated tables seeded at startup
    pub num_tables: usize,
    /// Interval between scheduler ticks
    pub tick_interval: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables with optional CLI
    /// overrides.
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        num_tables_override: Option<usize>,
        tick_secs_override: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| {
                "127.0.0.1:3000"
                    .parse()
                    .expect("Default bind address is valid")
            });

        let num_tables =
            num_tables_override.unwrap_or_else(|| parse_env_or("NUM_TABLES", DEFAULT_NUM_TABLES));

        let tick_secs = tick_secs_override
            .unwrap_or_else(|| parse_env_or("TICK_INTERVAL_SECS", DEFAULT_TICK_INTERVAL_SECS));

        let config = Self {
            bind,
            num_tables,
            tick_interval: Duration::from_secs(tick_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::Invalid {
                var: "TICK_INTERVAL_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win() {
        let config = ServerConfig::from_env(
            Some("0.0.0.0:8080".parse().unwrap()),
            Some(3),
            Some(2),
        )
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.num_tables, 3);
        assert_eq!(config.tick_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        let err = ServerConfig::from_env(None, None, Some(0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
