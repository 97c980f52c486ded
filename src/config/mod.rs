// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration for the listener, database, links, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! Configuration module for the `MyEdtr` server
//!
//! - **Environment**: server settings loaded from environment variables
//! - **Database**: typed database location and pool settings

/// Database location and pool configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{Environment, LinkConfig, LogLevel, ServerConfig};
