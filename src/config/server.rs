//! Server configuration.

use serde::Deserialize;
use std::net::SocketAddr;

use super::ConfigError;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5002
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the bind address as a string pair suitable for a listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host", "cannot be empty"));
        }
        if self.socket_addr().parse::<SocketAddr>().is_err() {
            return Err(ConfigError::invalid(
                "server.host",
                "host:port does not form a valid socket address",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:5002");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn garbage_host_fails_validation() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 80,
        };
        assert!(config.validate().is_err());
    }
}
