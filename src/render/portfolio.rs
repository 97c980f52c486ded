// ABOUTME: Portfolio video list rendered inside the editor profile page
// ABOUTME: Collaborator seam so the profile page does not own video presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use super::{attr, text};
use std::fmt::Write;

/// Renders an editor's portfolio videos
///
/// The profile page calls this only when at least one URL exists.
pub trait PortfolioRenderer: Send + Sync {
    /// Render the URLs, in order, for the named editor
    fn render(&self, urls: &[String], editor_name: &str) -> String;
}

/// Default portfolio list: one link per video
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioVideos;

impl PortfolioRenderer for PortfolioVideos {
    fn render(&self, urls: &[String], editor_name: &str) -> String {
        let mut items = String::new();
        for (index, url) in urls.iter().enumerate() {
            let label = format!("Video {}", index + 1);
            if is_web_url(url) {
                let _ = writeln!(
                    items,
                    r#"            <li><a href="{href}" target="_blank" rel="noopener noreferrer">{label}</a></li>"#,
                    href = attr(url),
                );
            } else {
                // Non-web schemes are shown, never linked
                let _ = writeln!(
                    items,
                    r#"            <li><span title="{title}">{label}</span></li>"#,
                    title = attr(url),
                );
            }
        }

        format!(
            r#"<section class="card portfolio-videos">
        <h2>Portfolio Videos</h2>
        <p class="muted">Sample work from {name}</p>
        <ul>
{items}        </ul>
    </section>"#,
            name = text(editor_name),
        )
    }
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
