use crate::error::{ServerError, ServerResult};
use crate::server::ADMIN_STATE_PATH;
use healthchecks::{DEFAULT_HEALTH_PATH, DEFAULT_READY_PATH};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub health_path: String,
    pub ready_path: String,
    pub admin_enabled: bool,
    pub shutdown_drain: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> ServerResult<Self> {
        let config = Self {
            port: parse_var("PORT", "8080")?,
            health_path: env::var("HEALTH_PATH").unwrap_or_else(|_| DEFAULT_HEALTH_PATH.to_string()),
            ready_path: env::var("READY_PATH").unwrap_or_else(|_| DEFAULT_READY_PATH.to_string()),
            admin_enabled: parse_var("ADMIN_ENABLED", "false")?,
            shutdown_drain: Duration::from_secs(parse_var("SHUTDOWN_DRAIN_SECS", "5")?),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ServerResult<()> {
        for (name, path) in [("HEALTH_PATH", &self.health_path), ("READY_PATH", &self.ready_path)] {
            if !path.starts_with('/') {
                return Err(ServerError::InvalidConfig(format!(
                    "{} must start with '/', got {:?}",
                    name, path
                )));
            }

            // Probe routes are static; the router treats these as captures
            if path
                .split('/')
                .any(|segment| segment.starts_with([':', '*']) || segment.contains(['{', '}']))
            {
                return Err(ServerError::InvalidConfig(format!(
                    "{} must be a static path without ':', '*', '{{' or '}}' segments, got {:?}",
                    name, path
                )));
            }
        }

        if self.health_path == self.ready_path {
            return Err(ServerError::InvalidConfig(format!(
                "HEALTH_PATH and READY_PATH must differ, both are {:?}",
                self.health_path
            )));
        }

        if self.admin_enabled
            && (self.health_path == ADMIN_STATE_PATH || self.ready_path == ADMIN_STATE_PATH)
        {
            return Err(ServerError::InvalidConfig(format!(
                "{} is reserved for the admin endpoint",
                ADMIN_STATE_PATH
            )));
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str, default: &str) -> ServerResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|e| ServerError::InvalidConfig(format!("{}: {}", name, e)))
}
