use std::env;
use anyhow::{Context, Result, bail};

use crate::routes;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub docs_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3001,
            service_host: "127.0.0.1".to_string(),
            docs_enabled: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let service_port = match lookup("SERVICE_PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            None => defaults.service_port,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or(defaults.service_host);

        let docs_enabled = match lookup("SERVICE_DOCS_ENABLED") {
            Some(value) => parse_flag(&value)
                .context("SERVICE_DOCS_ENABLED must be one of: true, false, 1, 0")?,
            None => defaults.docs_enabled,
        };

        Ok(Config {
            service_port,
            service_host,
            docs_enabled,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_address());
        tracing::info!(
            "  API docs: {}",
            if self.docs_enabled { routes::DOCS } else { "disabled" }
        );
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("unrecognized flag value '{}'", other),
    }
}
