// ABOUTME: HTML rendering for server-rendered pages and embeddable widgets
// ABOUTME: Shared escaping helpers, the page shell, and the not-found page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! HTML rendering
//!
//! Markup is produced with `format!` templates. Every value that comes from
//! the store or the query string goes through [`text`] or [`attr`].

/// Portfolio video list collaborator
pub mod portfolio;
/// Editor profile page
pub mod profile;
/// Subscription usage meter widget
pub mod usage_meter;

pub use portfolio::{PortfolioRenderer, PortfolioVideos};
pub use profile::{PlaceholderStats, ProfileLookupError, ProfilePage, ProfileRenderer};
pub use usage_meter::{ProgressColor, UpgradePrompt, UsageMeter, UsageState};

use std::borrow::Cow;

/// Escape a value for use as element text
#[must_use]
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape a value for use inside a double-quoted attribute
#[must_use]
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Wrap a body fragment in a complete HTML document
#[must_use]
pub fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | MyEdtr</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = text(title),
    )
}

/// Standard not-found page
#[must_use]
pub fn not_found_page(browse_href: &str) -> String {
    page_shell(
        "Page not found",
        &format!(
            r#"<main class="not-found">
    <h1>404</h1>
    <p>This page could not be found.</p>
    <a href="{browse}">Back to Browse Editors</a>
</main>"#,
            browse = attr(browse_href),
        ),
    )
}
