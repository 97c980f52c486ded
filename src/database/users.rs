// ABOUTME: Account table migration and write helpers
// ABOUTME: Accounts carry the email and user type joined onto editor profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use super::Database;
use crate::errors::AppResult;
use chrono::{DateTime, Utc};

/// Account row to insert
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Account identifier
    pub id: String,
    /// Unique email
    pub email: String,
    /// Raw user type (`editor`, `client`, or anything the backend wrote)
    pub user_type: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                user_type TEXT NOT NULL DEFAULT 'editor',
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert an account
    ///
    /// # Errors
    ///
    /// Returns an error if the id or email already exists
    pub async fn create_user(&self, user: &NewUser) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, user_type, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.user_type)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete an account; linked profiles become unlinked
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails
    pub async fn delete_user(&self, user_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
