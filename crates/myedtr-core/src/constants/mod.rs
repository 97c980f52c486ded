// ABOUTME: Application constants grouped by domain
// ABOUTME: Stored string values, route targets, and usage meter thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! Constants module
//!
//! Values that cross a boundary (database text columns, query strings, link
//! targets) live here so the parsing and rendering sides agree.

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const MYEDTR_SERVER: &str = "myedtr-server";
}

/// Subscription tier values as stored and accepted in query strings
pub mod tiers {
    /// Free tier
    pub const FREE: &str = "free";
    /// Pro tier
    pub const PRO: &str = "pro";
    /// Featured ("`MyEdtr` Verified") tier
    pub const FEATURED: &str = "featured";
}

/// Editor availability values as stored in `editor_profiles.availability_status`
pub mod availability {
    /// Open to new projects
    pub const AVAILABLE: &str = "available";
    /// Working, may accept later
    pub const BUSY: &str = "busy";
    /// Not taking work
    pub const UNAVAILABLE: &str = "unavailable";
}

/// Account discriminator values as stored in `users.user_type`
pub mod user_types {
    /// Freelance editor account
    pub const EDITOR: &str = "editor";
    /// Hiring client account
    pub const CLIENT: &str = "client";
}

/// Default navigation targets
pub mod routes {
    /// Editor listing page
    pub const BROWSE: &str = "/browse";
    /// Subscription pricing page
    pub const PRICING: &str = "/pricing";
}

/// Usage meter thresholds
pub mod usage {
    /// Percentage at or above which a bounded metric counts as near its limit
    pub const NEAR_LIMIT_PERCENT: f64 = 80.0;
    /// Upper clamp for the consumption percentage
    pub const MAX_PERCENT: f64 = 100.0;
}

/// Glyph shown in the avatar when a display name has no first character
pub const AVATAR_FALLBACK_GLYPH: char = '?';
