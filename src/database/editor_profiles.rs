// ABOUTME: Editor profile table migration, joined lookup, and write helpers
// ABOUTME: The lookup inner-joins the linked account so unlinked profiles read as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{AvailabilityStatus, EditorProfile, LinkedAccount, UserType};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Editor profile row to insert
#[derive(Debug, Clone)]
pub struct NewEditorProfile {
    /// Profile identifier
    pub id: String,
    /// Linked account, `None` for a profile without an account
    pub user_id: Option<String>,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Free-text location
    pub location: Option<String>,
    /// Free-text experience level
    pub experience_level: Option<String>,
    /// Hourly rate in dollars
    pub hourly_rate: f64,
    /// Raw availability text as the backend stores it
    pub availability_status: String,
    /// Free-text bio
    pub bio: String,
    /// Free-text portfolio description
    pub portfolio_description: Option<String>,
    /// Portfolio video URLs
    pub portfolio_urls: Vec<String>,
    /// Specialty labels
    pub specialties: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct EditorProfileRow {
    id: String,
    user_id: String,
    name: String,
    avatar_url: Option<String>,
    location: Option<String>,
    experience_level: Option<String>,
    hourly_rate: f64,
    availability_status: String,
    bio: String,
    portfolio_description: Option<String>,
    portfolio_urls: Option<String>,
    specialties: Option<String>,
    created_at: DateTime<Utc>,
    email: String,
    user_type: String,
}

impl TryFrom<EditorProfileRow> for EditorProfile {
    type Error = AppError;

    fn try_from(row: EditorProfileRow) -> AppResult<Self> {
        Ok(Self {
            portfolio_urls: decode_list(row.portfolio_urls.as_deref(), "portfolio_urls")?,
            specialties: decode_list(row.specialties.as_deref(), "specialties")?,
            availability_status: AvailabilityStatus::from_stored(&row.availability_status),
            account: LinkedAccount {
                email: row.email,
                user_type: UserType::from_stored(&row.user_type),
            },
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            avatar_url: row.avatar_url,
            location: row.location,
            experience_level: row.experience_level,
            hourly_rate: row.hourly_rate,
            bio: row.bio,
            portfolio_description: row.portfolio_description,
            created_at: row.created_at,
        })
    }
}

/// Decode a JSON array column; NULL reads as empty
fn decode_list(raw: Option<&str>, column: &str) -> AppResult<Vec<String>> {
    raw.map_or_else(
        || Ok(Vec::new()),
        |json| {
            serde_json::from_str(json).map_err(|e| {
                AppError::serialization(format!("Invalid JSON in editor_profiles.{column}: {e}"))
            })
        },
    )
}

impl Database {
    /// Create the `editor_profiles` table
    pub(super) async fn migrate_editor_profiles(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS editor_profiles (
                id TEXT PRIMARY KEY,
                user_id TEXT REFERENCES users(id) ON DELETE SET NULL,
                name TEXT NOT NULL,
                avatar_url TEXT,
                location TEXT,
                experience_level TEXT,
                hourly_rate REAL NOT NULL DEFAULT 0,
                availability_status TEXT NOT NULL DEFAULT 'available',
                bio TEXT NOT NULL DEFAULT '',
                portfolio_description TEXT,
                portfolio_urls TEXT,
                specialties TEXT,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_editor_profiles_user_id ON editor_profiles(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch one profile joined with its account
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a list column holds invalid JSON
    pub async fn find_editor_profile(&self, id: &str) -> AppResult<Option<EditorProfile>> {
        let row: Option<EditorProfileRow> = sqlx::query_as(
            r"
            SELECT
                p.id, p.user_id, p.name, p.avatar_url, p.location, p.experience_level,
                p.hourly_rate, p.availability_status, p.bio, p.portfolio_description,
                p.portfolio_urls, p.specialties, p.created_at,
                u.email, u.user_type
            FROM editor_profiles p
            INNER JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(EditorProfile::try_from).transpose()
    }

    /// Insert an editor profile
    ///
    /// # Errors
    ///
    /// Returns an error if the id exists or `user_id` names a missing account
    pub async fn create_editor_profile(&self, profile: &NewEditorProfile) -> AppResult<()> {
        let portfolio_urls = serde_json::to_string(&profile.portfolio_urls)?;
        let specialties = serde_json::to_string(&profile.specialties)?;

        sqlx::query(
            r"
            INSERT INTO editor_profiles (
                id, user_id, name, avatar_url, location, experience_level, hourly_rate,
                availability_status, bio, portfolio_description, portfolio_urls, specialties,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(&profile.id)
        .bind(&profile.user_id)
        .bind(&profile.name)
        .bind(&profile.avatar_url)
        .bind(&profile.location)
        .bind(&profile.experience_level)
        .bind(profile.hourly_rate)
        .bind(&profile.availability_status)
        .bind(&profile.bio)
        .bind(&profile.portfolio_description)
        .bind(portfolio_urls)
        .bind(specialties)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
