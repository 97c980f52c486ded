// ABOUTME: Editor profile page route
// ABOUTME: Renders GET /editor/:id or the standard 404 page when the profile cannot be shown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use crate::render::not_found_page;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

/// Editor profile routes handler
pub struct EditorRoutes;

impl EditorRoutes {
    /// Create editor profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/editor/:id", get(Self::handle_profile))
            .with_state(resources)
    }

    /// Handle GET /editor/:id
    ///
    /// Missing profiles, unlinked profiles, and store failures all produce
    /// the same 404 page. The renderer logs the store failure.
    async fn handle_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Response {
        match resources.profiles.render(&id).await {
            Ok(page) => Html(page).into_response(),
            Err(_) => (
                StatusCode::NOT_FOUND,
                Html(not_found_page(&resources.profiles.links().browse)),
            )
                .into_response(),
        }
    }
}
