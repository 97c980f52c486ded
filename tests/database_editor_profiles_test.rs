// ABOUTME: Integration tests for the editor profile store
// ABOUTME: Exercises the joined lookup against file-backed and in-memory SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use myedtr_server::{
    config::{DatabaseConfig, DatabaseUrl},
    database::{Database, ProfileStore},
    models::{AvailabilityStatus, UserType},
};

#[tokio::test]
async fn test_lookup_joins_account_fields() -> Result<()> {
    let database = common::create_test_database().await?;
    common::seed_linked_editor(&database, common::editor_profile("ed-1", Some("user-1"))).await?;

    let profile = database.get_editor_profile("ed-1").await?.unwrap();

    assert_eq!(profile.id, "ed-1");
    assert_eq!(profile.user_id, "user-1");
    assert_eq!(profile.name, "Maya Chen");
    assert_eq!(profile.account.email, "user-1@example.com");
    assert_eq!(profile.account.user_type, UserType::Editor);
    assert_eq!(profile.availability_status, AvailabilityStatus::Available);
    assert_eq!(
        profile.portfolio_urls,
        vec!["https://vimeo.com/1", "https://vimeo.com/2"]
    );
    assert_eq!(profile.specialties, vec!["Documentary", "Color Grading"]);
    assert_eq!(profile.member_since(), "Jan 2024");
    Ok(())
}

#[tokio::test]
async fn test_lookup_missing_id_is_none() -> Result<()> {
    let database = common::create_test_database().await?;
    assert!(database.get_editor_profile("ed-404").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_lookup_excludes_unlinked_profile() -> Result<()> {
    let database = common::create_test_database().await?;
    database
        .create_editor_profile(&common::editor_profile("ed-orphan", None))
        .await?;

    assert!(database.get_editor_profile("ed-orphan").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_deleting_account_unlinks_profile() -> Result<()> {
    let database = common::create_test_database().await?;
    common::seed_linked_editor(&database, common::editor_profile("ed-2", Some("user-2"))).await?;

    assert!(database.delete_user("user-2").await?);
    assert!(!database.delete_user("user-2").await?);
    assert!(database.get_editor_profile("ed-2").await?.is_none());

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM editor_profiles")
        .fetch_one(database.pool())
        .await?;
    assert_eq!(remaining, 1);
    Ok(())
}

#[tokio::test]
async fn test_profile_requires_existing_account() -> Result<()> {
    let database = common::create_test_database().await?;
    let result = database
        .create_editor_profile(&common::editor_profile("ed-3", Some("ghost")))
        .await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_raw_store_values_are_classified() -> Result<()> {
    let database = common::create_test_database().await?;
    let mut user = common::editor_user("user-4");
    user.user_type = "agency".to_owned();
    database.create_user(&user).await?;

    let mut profile = common::editor_profile("ed-4", Some("user-4"));
    profile.availability_status = "Busy".to_owned();
    database.create_editor_profile(&profile).await?;

    let profile = database.get_editor_profile("ed-4").await?.unwrap();
    assert_eq!(profile.account.user_type, UserType::Unknown);
    assert_eq!(profile.availability_status, AvailabilityStatus::Unknown);
    Ok(())
}

#[tokio::test]
async fn test_null_list_columns_read_as_empty() -> Result<()> {
    let database = common::create_test_database().await?;
    common::seed_linked_editor(&database, common::editor_profile("ed-5", Some("user-5"))).await?;
    sqlx::query("UPDATE editor_profiles SET portfolio_urls = NULL, specialties = NULL WHERE id = $1")
        .bind("ed-5")
        .execute(database.pool())
        .await?;

    let profile = database.get_editor_profile("ed-5").await?.unwrap();
    assert!(profile.portfolio_urls.is_empty());
    assert!(profile.specialties.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_list_column_is_an_error() -> Result<()> {
    let database = common::create_test_database().await?;
    common::seed_linked_editor(&database, common::editor_profile("ed-6", Some("user-6"))).await?;
    sqlx::query("UPDATE editor_profiles SET specialties = 'not json' WHERE id = $1")
        .bind("ed-6")
        .execute(database.pool())
        .await?;

    assert!(database.get_editor_profile("ed-6").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_file_database_persists_and_migrates_idempotently() -> Result<()> {
    common::init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.db");
    let config = DatabaseConfig {
        url: DatabaseUrl::parse_url(&format!("sqlite:{}", path.display()))?,
        ..DatabaseConfig::default()
    };

    {
        let database = Database::from_config(&config).await?;
        common::seed_linked_editor(&database, common::editor_profile("ed-7", Some("user-7")))
            .await?;
        database.pool().close().await;
    }

    let reopened = Database::from_config(&config).await?;
    reopened.migrate().await?;
    let profile = reopened.get_editor_profile("ed-7").await?.unwrap();
    assert_eq!(profile.name, "Maya Chen");
    Ok(())
}
