// ABOUTME: SQLite persistence for accounts and editor profiles
// ABOUTME: Owns the connection pool, schema migrations, and the ProfileStore seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! # Database Management
//!
//! The marketplace backend owns this data; the server only needs to read one
//! profile per request. Write helpers exist for seeding and tests.

mod editor_profiles;
mod users;

pub use editor_profiles::NewEditorProfile;
pub use users::NewUser;

use crate::config::database::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use crate::models::EditorProfile;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

/// Read access to editor profiles
///
/// Implementations perform a single lookup joined with the linked account.
/// A profile without a linked account is reported as absent.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch one profile by identifier
    async fn get_editor_profile(&self, id: &str) -> AppResult<Option<EditorProfile>>;
}

/// Database manager for accounts and editor profiles
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        Self::connect(database_url, 5, true).await
    }

    /// Create a connection from server configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database directory cannot be created, or the
    /// connection or migrations fail
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Self::connect(
            &config.url.to_connection_string(),
            config.max_connections,
            config.auto_migrate,
        )
        .await
    }

    async fn connect(database_url: &str, max_connections: u32, migrate: bool) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `sqlite::memory:` is a separate database
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            max_connections.max(1)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        if migrate {
            db.migrate().await?;
        }

        info!(url = %database_url, max_connections, "Database connected");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_editor_profiles().await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for Database {
    async fn get_editor_profile(&self, id: &str) -> AppResult<Option<EditorProfile>> {
        self.find_editor_profile(id).await
    }
}
