use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};

/// Port the service listens on when `SERVICE_PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = match env::var("SERVICE_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            Err(_) => DEFAULT_PORT,
        };

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    /// Address to bind the HTTP listener to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.service_host, self.service_port)
            .parse()
            .with_context(|| {
                format!(
                    "SERVICE_HOST '{}' is not a valid IP address",
                    self.service_host
                )
            })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
