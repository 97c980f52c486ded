// ABOUTME: Shared resource container handed to every route as axum state
// ABOUTME: Holds the profile renderer over the store seam and the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! # Server Resources
//!
//! Built once at startup and shared through `Arc`. Nothing in here changes
//! after construction.

use crate::config::ServerConfig;
use crate::database::ProfileStore;
use crate::render::{PortfolioRenderer, PortfolioVideos, ProfileRenderer};
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Editor profile lookup and rendering
    pub profiles: ProfileRenderer,
    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Resources over `store` with the default portfolio list
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>, config: Arc<ServerConfig>) -> Self {
        Self::with_portfolio(store, Arc::new(PortfolioVideos), config)
    }

    /// Resources with a custom portfolio collaborator
    #[must_use]
    pub fn with_portfolio(
        store: Arc<dyn ProfileStore>,
        portfolio: Arc<dyn PortfolioRenderer>,
        config: Arc<ServerConfig>,
    ) -> Self {
        let profiles = ProfileRenderer::new(store, portfolio, config.links.clone());
        Self { profiles, config }
    }
}
