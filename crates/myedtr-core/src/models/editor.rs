// ABOUTME: Editor profile domain model joined with its linked account
// ABOUTME: Availability and user type are closed variants parsed once at the store boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{availability, user_types, AVATAR_FALLBACK_GLYPH};

/// Editor availability for new work
///
/// Stored as free text by the backend. Anything outside the three known values
/// becomes `Unknown` instead of failing the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AvailabilityStatus {
    /// Open to new projects
    Available,
    /// Currently working, may accept later
    Busy,
    /// Not taking work
    Unavailable,
    /// Value the renderer does not recognise
    Unknown,
}

impl AvailabilityStatus {
    /// Classify a stored availability value
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            availability::AVAILABLE => Self::Available,
            availability::BUSY => Self::Busy,
            availability::UNAVAILABLE => Self::Unavailable,
            _ => Self::Unknown,
        }
    }

    /// Visitor-facing description
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available for new projects",
            Self::Busy => "Currently busy",
            Self::Unavailable => "Not available",
            Self::Unknown => "Status unknown",
        }
    }

    /// Styling tone for the availability badge; `Unknown` is neutral
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Available => "green",
            Self::Busy => "yellow",
            Self::Unavailable => "red",
            Self::Unknown => "neutral",
        }
    }
}

impl From<String> for AvailabilityStatus {
    fn from(value: String) -> Self {
        Self::from_stored(&value)
    }
}

impl Display for AvailabilityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Account kind of the user linked to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UserType {
    /// Freelance editor
    Editor,
    /// Hiring client
    Client,
    /// Unrecognised stored value
    Unknown,
}

impl UserType {
    /// Classify a stored user type value
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            user_types::EDITOR => Self::Editor,
            user_types::CLIENT => Self::Client,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for UserType {
    fn from(value: String) -> Self {
        Self::from_stored(&value)
    }
}

/// Account record joined onto every profile read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccount {
    /// Account email
    pub email: String,
    /// Account kind
    pub user_type: UserType,
}

/// Read-only snapshot of an editor profile and its linked account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorProfile {
    /// Profile identifier
    pub id: String,
    /// Identifier of the linked account
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Free-text location
    pub location: Option<String>,
    /// Free-text experience level label
    pub experience_level: Option<String>,
    /// Hourly rate in dollars
    pub hourly_rate: f64,
    /// Availability classification
    pub availability_status: AvailabilityStatus,
    /// Free-text bio
    pub bio: String,
    /// Free-text portfolio and experience description
    pub portfolio_description: Option<String>,
    /// Portfolio video URLs in display order
    pub portfolio_urls: Vec<String>,
    /// Specialty labels
    pub specialties: Vec<String>,
    /// Profile creation time
    pub created_at: DateTime<Utc>,
    /// Linked account
    pub account: LinkedAccount,
}

impl EditorProfile {
    /// Character shown in place of a missing avatar image
    ///
    /// Falls back to `?` when the display name is empty.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        self.name.chars().next().unwrap_or(AVATAR_FALLBACK_GLYPH)
    }

    /// Avatar URL, treating an empty string as absent
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        present(self.avatar_url.as_deref())
    }

    /// Location, treating an empty string as absent
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        present(self.location.as_deref())
    }

    /// Experience level, treating an empty string as absent
    #[must_use]
    pub fn experience_level(&self) -> Option<&str> {
        present(self.experience_level.as_deref())
    }

    /// Portfolio description, treating an empty string as absent
    #[must_use]
    pub fn portfolio_description(&self) -> Option<&str> {
        present(self.portfolio_description.as_deref())
    }

    /// Abbreviated month and full year of `created_at`, e.g. `Mar 2024`
    #[must_use]
    pub fn member_since(&self) -> String {
        self.created_at.format("%b %Y").to_string()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
