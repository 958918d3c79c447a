//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_RECENT_LIMIT, DEFAULT_RECENT_MAX_LIMIT,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SERVICE_NAME,
};
use crate::domain::{DomainTable, DomainTableError};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub waitlist: WaitlistConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `postgres://...`, `memory://`, or unset for no store
    pub url: Option<String>,
    pub max_connections: u32,
}

/// Waitlist behavior configuration
#[derive(Debug, Clone)]
pub struct WaitlistConfig {
    /// Optional JSON file replacing the built-in domain allow-list
    pub domains_file: Option<PathBuf>,
    pub recent_default_limit: u32,
    pub recent_max_limit: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            waitlist: WaitlistConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                service_name: DEFAULT_SERVICE_NAME.to_string(),
                rust_log: "info".to_string(),
                log_format: LogFormat::Pretty,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            },
            waitlist: WaitlistConfig {
                domains_file: None,
                recent_default_limit: DEFAULT_RECENT_LIMIT,
                recent_max_limit: DEFAULT_RECENT_MAX_LIMIT,
            },
        }
    }
}

/// Read an optional variable, treating empty values as unset
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a variable or fall back to a default
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional_var("HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_SERVER_PORT)?,
            service_name: optional_var("SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            rust_log: optional_var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format: parse_var("LOG_FORMAT", LogFormat::Pretty)?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: optional_var("DATABASE_URL"),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl WaitlistConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            domains_file: optional_var("WAITLIST_DOMAINS_FILE").map(PathBuf::from),
            recent_default_limit: parse_var("WAITLIST_RECENT_DEFAULT_LIMIT", DEFAULT_RECENT_LIMIT)?,
            recent_max_limit: parse_var("WAITLIST_RECENT_MAX_LIMIT", DEFAULT_RECENT_MAX_LIMIT)?,
        };

        if config.recent_default_limit > config.recent_max_limit {
            return Err(ConfigError::InvalidValue(
                "WAITLIST_RECENT_DEFAULT_LIMIT".to_string(),
            ));
        }

        Ok(config)
    }

    /// Build the domain allow-list, from file when configured
    pub fn domain_table(&self) -> Result<DomainTable, ConfigError> {
        match &self.domains_file {
            Some(path) => Ok(DomainTable::from_json_file(path)?),
            None => Ok(DomainTable::ivy_league()?),
        }
    }

    /// Apply the default and the upper bound to a requested limit
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.recent_default_limit)
            .min(self.recent_max_limit)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),

    #[error("Invalid domain allow-list: {0}")]
    DomainTable(#[from] DomainTableError),
}
