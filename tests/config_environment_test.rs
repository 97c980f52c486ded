// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use myedtr_server::config::{DatabaseUrl, Environment, ServerConfig};
use myedtr_server::errors::ErrorCode;
use myedtr_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};

const VARS: &[&str] = &[
    "HTTP_HOST",
    "HTTP_PORT",
    "DATABASE_URL",
    "AUTO_MIGRATE",
    "DATABASE_MAX_CONNECTIONS",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
    "BROWSE_ROUTE",
    "PRICING_ROUTE",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.links.browse, "/browse");
    assert_eq!(config.links.pricing, "/pricing");
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(config.database.auto_migrate);
    assert_eq!(config.database.url.to_connection_string(), "sqlite:./data/myedtr.db");
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_env();
    env::set_var("HTTP_HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9191");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("BROWSE_ROUTE", "https://myedtr.example/browse");
    env::set_var("PRICING_ROUTE", "/plans");
    env::set_var("ENVIRONMENT", "testing");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.http_port, 9191);
    assert_eq!(config.database.url, DatabaseUrl::Memory);
    assert_eq!(config.links.browse, "https://myedtr.example/browse");
    assert_eq!(config.links.pricing, "/plans");
    assert_eq!(config.environment, Environment::Testing);
}

#[test]
#[serial]
fn test_invalid_port_is_config_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_postgres_url_rejected() {
    clear_env();
    env::set_var("DATABASE_URL", "postgres://localhost/myedtr");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_memory_database_rejected_in_production() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATABASE_URL", "sqlite::memory:");

    let err = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let logging = LoggingConfig::from_env();
    clear_env();

    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert_eq!(logging.service_name, "myedtr-server");
}
