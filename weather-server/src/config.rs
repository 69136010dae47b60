//! Server configuration from environment variables.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use crate::visualcrossing::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, VisualCrossingConfig};

pub const API_KEY_VAR: &str = "VISUALCROSSING_API_KEY";
pub const BASE_URL_VAR: &str = "VISUALCROSSING_BASE_URL";
pub const TIMEOUT_VAR: &str = "WEATHER_TIMEOUT_SECS";
pub const BIND_ADDR_VAR: &str = "WEATHER_BIND_ADDR";
pub const MOCK_DIR_VAR: &str = "WEATHER_MOCK_DIR";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be a socket address like 127.0.0.1:8080, got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Upstream API key (empty if unset)
    pub api_key: String,

    /// Upstream base URL
    pub base_url: String,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,

    /// Serve canned data from this directory instead of calling the API
    pub mock_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?,
            None => DEFAULT_BIND_ADDR,
        };

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            api_key: get(API_KEY_VAR).unwrap_or_default(),
            base_url: get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
            mock_dir: get(MOCK_DIR_VAR).map(PathBuf::from),
        })
    }

    /// Client configuration for the upstream API.
    pub fn upstream(&self) -> VisualCrossingConfig {
        VisualCrossingConfig::new(&self.api_key)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.mock_dir.is_none());
    }

    #[test]
    fn all_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://localhost:9000/timeline"),
            (TIMEOUT_VAR, "5"),
            (BIND_ADDR_VAR, "0.0.0.0:3000"),
            (MOCK_DIR_VAR, "data/mock_cities"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, "http://localhost:9000/timeline");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.mock_dir, Some(PathBuf::from("data/mock_cities")));
    }

    #[test]
    fn blank_values_are_unset() {
        let config =
            ServerConfig::from_lookup(lookup(&[(API_KEY_VAR, "  "), (TIMEOUT_VAR, "")])).unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn invalid_timeout() {
        let err = ServerConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimeout {
                var: TIMEOUT_VAR,
                value: "soon".into()
            }
        );

        let err = ServerConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "WEATHER_BIND_ADDR must be a socket address like 127.0.0.1:8080, got \"localhost\""
        );
    }

    #[test]
    fn upstream_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "abc123"),
            (TIMEOUT_VAR, "7"),
        ]))
        .unwrap();

        let upstream = config.upstream();
        assert_eq!(upstream.api_key, "abc123");
        assert_eq!(upstream.base_url, DEFAULT_BASE_URL);
        assert_eq!(upstream.timeout_secs, 7);
    }
}
