// ABOUTME: Editor profile page: one joined store lookup rendered into a full HTML page
// ABOUTME: Missing or unlinked profiles and store failures all surface as not-found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! # Editor Profile Page
//!
//! [`ProfileRenderer`] performs the lookup and hands the snapshot to
//! [`ProfilePage`], which renders deterministically from it.

use super::portfolio::PortfolioRenderer;
use super::{attr, page_shell, text};
use crate::config::LinkConfig;
use crate::database::ProfileStore;
use crate::errors::AppError;
use crate::models::EditorProfile;
use std::fmt::Write;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Statistics shown before review and project tracking exist
///
/// None of these are computed from data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderStats {
    /// Header rating value
    pub rating: &'static str,
    /// Quick Stats response time
    pub response_time: &'static str,
    /// Quick Stats completed projects
    pub projects_completed: &'static str,
    /// Quick Stats client satisfaction
    pub client_satisfaction: &'static str,
    /// Line under the Send Message action
    pub typical_response: &'static str,
}

impl PlaceholderStats {
    /// Values every profile currently shows
    pub const DEFAULT: Self = Self {
        rating: "5.0",
        response_time: "< 1 hour",
        projects_completed: "0",
        client_satisfaction: "N/A",
        typical_response: "Typically responds within 1 hour",
    };
}

impl Default for PlaceholderStats {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a profile page could not be produced
#[derive(Debug, Error)]
pub enum ProfileLookupError {
    /// No profile with a linked account has this id
    #[error("editor profile {id} not found")]
    NotFound {
        /// Requested identifier
        id: String,
    },
    /// The store could not answer
    #[error("editor profile {id} lookup failed: {source}")]
    Store {
        /// Requested identifier
        id: String,
        /// Underlying store error
        #[source]
        source: AppError,
    },
}

/// Renders one snapshot of an editor profile
pub struct ProfilePage<'a> {
    profile: &'a EditorProfile,
    links: &'a LinkConfig,
    portfolio: &'a dyn PortfolioRenderer,
    stats: PlaceholderStats,
}

impl<'a> ProfilePage<'a> {
    /// Page for `profile` using the default placeholder statistics
    #[must_use]
    pub fn new(
        profile: &'a EditorProfile,
        links: &'a LinkConfig,
        portfolio: &'a dyn PortfolioRenderer,
    ) -> Self {
        Self {
            profile,
            links,
            portfolio,
            stats: PlaceholderStats::DEFAULT,
        }
    }

    /// Full HTML document
    #[must_use]
    pub fn render(&self) -> String {
        let p = self.profile;

        let mut main = String::new();
        main.push_str(&self.about());
        if let Some(description) = p.portfolio_description() {
            let _ = write!(
                main,
                r#"
        <section class="card portfolio-experience">
            <h2>Portfolio &amp; Experience</h2>
            <p>{description}</p>
        </section>"#,
                description = text(description),
            );
        }
        if !p.portfolio_urls.is_empty() {
            main.push_str("\n        ");
            main.push_str(&self.portfolio.render(&p.portfolio_urls, &p.name));
        }
        main.push_str(&self.reviews());

        let body = format!(
            r#"<div class="profile-page" data-editor-id="{id}">
    <nav><a class="back-link" href="{browse}">Back to Browse Editors</a></nav>
{header}
    <div class="profile-layout">
        <div class="profile-main">{main}
        </div>
        <aside class="profile-sidebar">{specialties}{quick_stats}{contact}
        </aside>
    </div>
</div>"#,
            id = attr(&p.id),
            browse = attr(&self.links.browse),
            header = self.header(),
            specialties = self.specialties(),
            quick_stats = self.quick_stats(),
            contact = self.contact(),
        );

        page_shell(&p.name, &body)
    }

    fn header(&self) -> String {
        let p = self.profile;

        let avatar = p.avatar().map_or_else(
            || {
                format!(
                    r#"<div class="avatar avatar--fallback" aria-hidden="true">{}</div>"#,
                    text(&p.avatar_initial().to_string())
                )
            },
            |src| {
                format!(
                    r#"<img class="avatar" src="{src}" alt="{name}">"#,
                    src = attr(src),
                    name = attr(&p.name),
                )
            },
        );

        let mut details = String::new();
        if let Some(location) = p.location() {
            let _ = write!(
                details,
                r#"
                <span class="profile-header__location">{}</span>"#,
                text(location)
            );
        }
        if let Some(level) = p.experience_level() {
            let _ = write!(
                details,
                r#"
                <span class="profile-header__experience">{}</span>"#,
                text(level)
            );
        }

        let status = p.availability_status;
        format!(
            r##"    <header class="card profile-header">
        {avatar}
        <div class="profile-header__info">
            <h1>{name}</h1>
            <div class="profile-header__details">{details}
                <span class="profile-header__rate">${rate}/hour</span>
            </div>
            <span class="badge badge--{tone}">{label}</span>
            <div class="profile-header__rating" data-placeholder="true">{rating} (No reviews yet)</div>
        </div>
        <a class="button button--primary" href="#contact">Contact Editor</a>
    </header>"##,
            name = text(&p.name),
            rate = p.hourly_rate,
            tone = status.tone(),
            label = status.label(),
            rating = self.stats.rating,
        )
    }

    fn about(&self) -> String {
        format!(
            r#"
            <section class="card about">
                <h2>About</h2>
                <p>{bio}</p>
            </section>"#,
            bio = text(&self.profile.bio),
        )
    }

    fn reviews(&self) -> String {
        format!(
            r#"
            <section class="card reviews" data-placeholder="true">
                <h2>Reviews</h2>
                <p>No reviews yet</p>
                <p class="muted">Be the first to hire {name}!</p>
            </section>"#,
            name = text(&self.profile.name),
        )
    }

    fn specialties(&self) -> String {
        let badges: String = self
            .profile
            .specialties
            .iter()
            .map(|s| format!("\n                <li class=\"badge\">{}</li>", text(s)))
            .collect();

        let list = if badges.is_empty() {
            String::new()
        } else {
            format!("\n            <ul class=\"badges\">{badges}\n            </ul>")
        };

        format!(
            r#"
            <section class="card specialties">
                <h2>Specialties</h2>{list}
            </section>"#
        )
    }

    fn quick_stats(&self) -> String {
        format!(
            r#"
            <section class="card quick-stats">
                <h2>Quick Stats</h2>
                <dl>
                    <dt>Response Time</dt><dd data-placeholder="true">{response}</dd>
                    <dt>Projects Completed</dt><dd data-placeholder="true">{projects}</dd>
                    <dt>Client Satisfaction</dt><dd data-placeholder="true">{satisfaction}</dd>
                    <dt>Member Since</dt><dd>{since}</dd>
                </dl>
            </section>"#,
            response = text(self.stats.response_time),
            projects = self.stats.projects_completed,
            satisfaction = self.stats.client_satisfaction,
            since = self.profile.member_since(),
        )
    }

    fn contact(&self) -> String {
        format!(
            r#"
            <section class="card contact" id="contact">
                <h2>Get in Touch</h2>
                <button class="button button--primary" type="button">Send Message</button>
                <p class="muted" data-placeholder="true">{typical}</p>
            </section>"#,
            typical = self.stats.typical_response,
        )
    }
}

/// Looks up editor profiles and renders their pages
#[derive(Clone)]
pub struct ProfileRenderer {
    store: Arc<dyn ProfileStore>,
    portfolio: Arc<dyn PortfolioRenderer>,
    links: LinkConfig,
}

impl ProfileRenderer {
    /// Create a renderer over `store`
    #[must_use]
    pub fn new(
        store: Arc<dyn ProfileStore>,
        portfolio: Arc<dyn PortfolioRenderer>,
        links: LinkConfig,
    ) -> Self {
        Self {
            store,
            portfolio,
            links,
        }
    }

    /// Link targets used by rendered pages
    #[must_use]
    pub const fn links(&self) -> &LinkConfig {
        &self.links
    }

    /// Fetch the profile with one lookup
    ///
    /// # Errors
    ///
    /// Returns [`ProfileLookupError::NotFound`] when no linked profile matches
    /// and [`ProfileLookupError::Store`] when the store fails
    pub async fn load(&self, id: &str) -> Result<EditorProfile, ProfileLookupError> {
        match self.store.get_editor_profile(id).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(ProfileLookupError::NotFound { id: id.to_owned() }),
            Err(source) => Err(ProfileLookupError::Store {
                id: id.to_owned(),
                source,
            }),
        }
    }

    /// Fetch and render a profile page
    ///
    /// # Errors
    ///
    /// Returns the lookup error when the profile cannot be loaded; nothing is
    /// rendered in that case
    pub async fn render(&self, id: &str) -> Result<String, ProfileLookupError> {
        let profile = self.load(id).await.inspect_err(|e| match e {
            ProfileLookupError::NotFound { .. } => debug!(editor_id = %id, "Editor profile not found"),
            ProfileLookupError::Store { source, .. } => {
                warn!(editor_id = %id, error = %source, "Editor profile lookup failed");
            }
        })?;

        Ok(ProfilePage::new(&profile, &self.links, self.portfolio.as_ref()).render())
    }
}
