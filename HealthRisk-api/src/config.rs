use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuration errors raised while reading the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// PORT is not a valid port number
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    /// HOST is not a valid IP address
    #[error("HOST must be an IP address, got '{0}'")]
    InvalidHost(String),
}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to (HOST, default 0.0.0.0)
    pub host: IpAddr,
    /// Port to listen on (PORT, default 3000)
    pub port: u16,
    /// Deployment environment reported by the health check (APP_ENV)
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.port,
        };

        let environment = lookup("APP_ENV")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.environment);

        Ok(Self { host, port, environment })
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(result, Err(ConfigError::InvalidPort("eighty".to_string())));

        let result = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_host() {
        let result = ServerConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")]));
        assert!(matches!(result, Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_blank_environment_falls_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[("APP_ENV", "  ")])).unwrap();
        assert_eq!(config.environment, "development");
    }
}
