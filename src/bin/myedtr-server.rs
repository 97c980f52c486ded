// ABOUTME: MyEdtr HTTP server binary
// ABOUTME: Loads configuration, opens the profile database, and serves pages and widgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! # `MyEdtr` Server Binary
//!
//! Serves editor profile pages and the usage meter widget until Ctrl-C.

use anyhow::Result;
use clap::Parser;
use myedtr_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "myedtr-server")]
#[command(about = "MyEdtr - editor profile pages and usage meter widgets")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
        config.validate()?;
    }

    logging::init_from_env()?;

    info!("Starting MyEdtr server");
    info!("{}", config.summary());

    let database = Database::from_config(&config.database).await?;
    info!(
        "Database initialized: {}",
        config.database.url.to_connection_string()
    );

    let resources = Arc::new(ServerResources::new(
        Arc::new(database),
        Arc::new(config),
    ));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
