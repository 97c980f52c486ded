// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, fixtures, and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `myedtr_server`

use anyhow::Result;
use chrono::{TimeZone, Utc};
use myedtr_server::{
    config::ServerConfig,
    database::{Database, NewEditorProfile, NewUser},
    resources::ServerResources,
    server::build_router,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Account fixture
pub fn editor_user(id: &str) -> NewUser {
    NewUser {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        user_type: "editor".to_owned(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
    }
}

/// Fully populated profile fixture linked to `user_id`
pub fn editor_profile(id: &str, user_id: Option<&str>) -> NewEditorProfile {
    NewEditorProfile {
        id: id.to_owned(),
        user_id: user_id.map(str::to_owned),
        name: "Maya Chen".to_owned(),
        avatar_url: Some("https://cdn.example.com/maya.png".to_owned()),
        location: Some("Toronto, Canada".to_owned()),
        experience_level: Some("Senior".to_owned()),
        hourly_rate: 85.0,
        availability_status: "available".to_owned(),
        bio: "Documentary and brand films.".to_owned(),
        portfolio_description: Some("Eight years of long-form documentary.".to_owned()),
        portfolio_urls: vec![
            "https://vimeo.com/1".to_owned(),
            "https://vimeo.com/2".to_owned(),
        ],
        specialties: vec!["Documentary".to_owned(), "Color Grading".to_owned()],
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    }
}

/// Insert an account and a linked profile
pub async fn seed_linked_editor(database: &Database, profile: NewEditorProfile) -> Result<()> {
    if let Some(user_id) = profile.user_id.as_deref() {
        database.create_user(&editor_user(user_id)).await?;
    }
    database.create_editor_profile(&profile).await?;
    Ok(())
}

/// Default configuration for router tests
pub fn test_config() -> Arc<ServerConfig> {
    Arc::new(ServerConfig::default())
}

/// Full application router over `database`
pub fn test_router(database: Arc<Database>) -> axum::Router {
    let resources = Arc::new(ServerResources::new(database, test_config()));
    build_router(resources)
}
