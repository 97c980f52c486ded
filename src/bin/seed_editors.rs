// ABOUTME: Demo data seeder for editor profiles and their accounts
// ABOUTME: Creates one editor per availability class plus an unlinked profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! Demo editor seeder for the `MyEdtr` server.
//!
//! Usage:
//! ```bash
//! # Seed demo editors (uses DATABASE_URL from environment)
//! cargo run --bin seed-editors
//!
//! # Override database URL
//! cargo run --bin seed-editors -- --database-url sqlite:./data/myedtr.db
//!
//! # Replace previously seeded rows
//! cargo run --bin seed-editors -- --force
//! ```

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use myedtr_server::config::{DatabaseConfig, DatabaseUrl};
use myedtr_server::database::{Database, NewEditorProfile, NewUser};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-editors",
    about = "MyEdtr demo editor seeder",
    long_about = "Create demo accounts and editor profiles covering every availability state"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete previously seeded rows and seed again
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Demo editor definition
struct DemoEditor {
    id: &'static str,
    user_id: Option<&'static str>,
    email: &'static str,
    name: &'static str,
    location: Option<&'static str>,
    experience_level: Option<&'static str>,
    hourly_rate: f64,
    availability: &'static str,
    bio: &'static str,
    portfolio_description: Option<&'static str>,
    portfolio_urls: &'static [&'static str],
    specialties: &'static [&'static str],
    joined_days_ago: i64,
}

const DEMO_EDITORS: &[DemoEditor] = &[
    DemoEditor {
        id: "ed-0001",
        user_id: Some("user-0001"),
        email: "maya.chen@demo.myedtr.test",
        name: "Maya Chen",
        location: Some("Toronto, Canada"),
        experience_level: Some("Senior"),
        hourly_rate: 85.0,
        availability: "available",
        bio: "Documentary and brand films with a focus on story structure and pacing.",
        portfolio_description: Some("Eight years cutting long-form documentary for streaming platforms."),
        portfolio_urls: &["https://vimeo.com/76979871", "https://www.youtube.com/watch?v=aqz-KE-bpKQ"],
        specialties: &["Documentary", "Color Grading", "Story Editing"],
        joined_days_ago: 420,
    },
    DemoEditor {
        id: "ed-0002",
        user_id: Some("user-0002"),
        email: "leo.martins@demo.myedtr.test",
        name: "Leo Martins",
        location: Some("Lisbon, Portugal"),
        experience_level: Some("Mid-level"),
        hourly_rate: 62.5,
        availability: "busy",
        bio: "Short-form social content and music videos.",
        portfolio_description: None,
        portfolio_urls: &["https://vimeo.com/22439234"],
        specialties: &["Music Videos", "Motion Graphics"],
        joined_days_ago: 150,
    },
    DemoEditor {
        id: "ed-0003",
        user_id: Some("user-0003"),
        email: "priya.nair@demo.myedtr.test",
        name: "Priya Nair",
        location: None,
        experience_level: None,
        hourly_rate: 120.0,
        availability: "unavailable",
        bio: "Commercial and trailer editor.",
        portfolio_description: Some("Trailers for independent features."),
        portfolio_urls: &[],
        specialties: &[],
        joined_days_ago: 900,
    },
    DemoEditor {
        id: "ed-0004",
        user_id: Some("user-0004"),
        email: "sam.okafor@demo.myedtr.test",
        name: "Sam Okafor",
        location: Some("Lagos, Nigeria"),
        experience_level: Some("Junior"),
        hourly_rate: 35.0,
        availability: "on_vacation",
        bio: "Wedding films and event highlights.",
        portfolio_description: None,
        portfolio_urls: &[],
        specialties: &["Weddings"],
        joined_days_ago: 30,
    },
    DemoEditor {
        id: "ed-0005",
        user_id: None,
        email: "",
        name: "Unlinked Editor",
        location: None,
        experience_level: None,
        hourly_rate: 50.0,
        availability: "available",
        bio: "This profile has no account and never renders.",
        portfolio_description: None,
        portfolio_urls: &[],
        specialties: &[],
        joined_days_ago: 10,
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== MyEdtr Demo Editor Seeder ===");

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.url = DatabaseUrl::parse_url(url)?;
    }
    config.auto_migrate = true;

    info!("Connecting to database: {}", config.url);
    let database = Database::from_config(&config).await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM editor_profiles WHERE id LIKE 'ed-%'")
        .fetch_one(database.pool())
        .await?;

    if existing > 0 {
        if !args.force {
            info!("Demo editors already seeded ({existing} found). Use --force to re-seed.");
            return Ok(());
        }
        remove_seeded(&database).await?;
    }

    info!("Seeding {} demo editors...", DEMO_EDITORS.len());
    let now = Utc::now();
    for editor in DEMO_EDITORS {
        let created_at = now - Duration::days(editor.joined_days_ago);

        if let Some(user_id) = editor.user_id {
            database
                .create_user(&NewUser {
                    id: user_id.to_owned(),
                    email: editor.email.to_owned(),
                    user_type: "editor".to_owned(),
                    created_at,
                })
                .await?;
        }

        database
            .create_editor_profile(&NewEditorProfile {
                id: editor.id.to_owned(),
                user_id: editor.user_id.map(str::to_owned),
                name: editor.name.to_owned(),
                avatar_url: None,
                location: editor.location.map(str::to_owned),
                experience_level: editor.experience_level.map(str::to_owned),
                hourly_rate: editor.hourly_rate,
                availability_status: editor.availability.to_owned(),
                bio: editor.bio.to_owned(),
                portfolio_description: editor.portfolio_description.map(str::to_owned),
                portfolio_urls: editor.portfolio_urls.iter().map(|s| (*s).to_owned()).collect(),
                specialties: editor.specialties.iter().map(|s| (*s).to_owned()).collect(),
                created_at,
            })
            .await?;

        info!("  {} -> /editor/{}", editor.name, editor.id);
    }

    info!("=== Seeding Complete ===");
    Ok(())
}

async fn remove_seeded(database: &Database) -> Result<()> {
    info!("Removing previously seeded demo editors");
    sqlx::query("DELETE FROM editor_profiles WHERE id LIKE 'ed-%'")
        .execute(database.pool())
        .await?;
    sqlx::query("DELETE FROM users WHERE email LIKE '%@demo.myedtr.test'")
        .execute(database.pool())
        .await?;
    Ok(())
}
