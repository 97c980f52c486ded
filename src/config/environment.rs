// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads server, database, link, and CORS settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! Environment-based configuration management
//!
//! Configuration comes only from environment variables; there is no config
//! file. Every variable has a default suitable for local development.

use super::database::DatabaseConfig;
use crate::constants::routes;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::net::IpAddr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Navigation targets rendered into pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkConfig {
    /// Editor listing page ("Back to Browse Editors")
    pub browse: String,
    /// Pricing page ("Upgrade")
    pub pricing: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            browse: routes::BROWSE.to_owned(),
            pricing: routes::PRICING.to_owned(),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Navigation targets
    pub links: LinkConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([127, 0, 0, 1]),
            http_port: 8080,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            links: LinkConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let http_host = env_var_or("HTTP_HOST", "127.0.0.1")
            .parse()
            .map_err(|e| AppError::config(format!("Invalid HTTP_HOST value: {e}")))?;
        let http_port = env_var_or("HTTP_PORT", "8080")
            .parse()
            .map_err(|e| AppError::config(format!("Invalid HTTP_PORT value: {e}")))?;

        let config = Self {
            http_host,
            http_port,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig::from_env()?,
            links: LinkConfig {
                browse: env_var_or("BROWSE_ROUTE", routes::BROWSE),
                pricing: env_var_or("PRICING_ROUTE", routes::PRICING),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if a link target is not an absolute path or URL
    pub fn validate(&self) -> AppResult<()> {
        for (name, target) in [
            ("BROWSE_ROUTE", &self.links.browse),
            ("PRICING_ROUTE", &self.links.pricing),
        ] {
            if !(target.starts_with('/') || target.starts_with("http")) {
                return Err(AppError::new(
                    crate::errors::ErrorCode::ConfigInvalid,
                    format!("{name} must be an absolute path or URL, got {target:?}"),
                ));
            }
        }

        if self.environment.is_production() && self.database.url.is_memory() {
            return Err(AppError::new(
                crate::errors::ErrorCode::ConfigInvalid,
                "In-memory database is not allowed in production",
            ));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "MyEdtr Server Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Browse Route: {}\n\
             - Pricing Route: {}\n\
             - CORS Origins: {}",
            self.http_host,
            self.http_port,
            self.environment,
            self.log_level,
            self.database.url,
            self.links.browse,
            self.links.pricing,
            self.cors.allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
