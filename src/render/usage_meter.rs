// ABOUTME: Subscription usage meter widget with threshold alerts and upgrade prompts
// ABOUTME: Pure function of current usage, limit, and tier; no store access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! # Usage Meter
//!
//! Shows how much of a capped metric a subscriber has consumed.
//!
//! - Bounded metrics get a progress bar: red at the limit, yellow from 80%,
//!   green below that. Near and at-limit states add an alert.
//! - When usage is near or at the limit and a higher tier exists, an upgrade
//!   card suggests it. `Featured` subscribers never see one.
//! - Unlimited metrics only show the label and "Unlimited".

use super::{attr, text};
use crate::constants::usage::{MAX_PERCENT, NEAR_LIMIT_PERCENT};
use crate::models::{SubscriptionTier, UsageLimit};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Progress bar colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressColor {
    /// Comfortably below the limit
    Green,
    /// Near the limit
    Yellow,
    /// At or over the limit
    Red,
}

impl ProgressColor {
    /// Indicator class for the progress bar
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Red => "bg-red-500",
        }
    }
}

/// Upgrade call-to-action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePrompt {
    /// Tier the prompt suggests
    pub next_tier: SubscriptionTier,
    /// Marketing name of `next_tier`
    pub tier_name: String,
    /// What the upgrade unlocks: "unlimited" or "increased limits"
    pub benefit: String,
}

impl UpgradePrompt {
    fn for_tier(next_tier: SubscriptionTier) -> Self {
        let benefit = if next_tier == SubscriptionTier::Featured {
            "unlimited"
        } else {
            "increased limits"
        };
        Self {
            next_tier,
            tier_name: next_tier.display_name().to_owned(),
            benefit: benefit.to_owned(),
        }
    }

    /// Copy line, e.g. "Upgrade to Pro for increased limits"
    #[must_use]
    pub fn copy(&self) -> String {
        format!("Upgrade to {} for {}", self.tier_name, self.benefit)
    }
}

/// Derived display state of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageState {
    /// Metric label
    pub metric_name: String,
    /// Current count
    pub current: u64,
    /// Cap, `null` in JSON when unlimited
    pub limit: UsageLimit,
    /// Subscriber tier
    pub tier: SubscriptionTier,
    /// Consumption in `[0, 100]`, 0 when unlimited
    pub percentage: f64,
    /// No cap
    pub is_unlimited: bool,
    /// At or above 80% of a bounded cap
    pub is_near_limit: bool,
    /// Current count reached a bounded cap
    pub is_at_limit: bool,
    /// Progress bar colour
    pub progress_color: ProgressColor,
    /// Upgrade suggestion, if one applies
    pub upgrade: Option<UpgradePrompt>,
}

/// Percentage of a limit consumed, clamped to 100
///
/// A zero cap counts as fully consumed instead of dividing by zero.
#[must_use]
pub fn usage_percentage(current: u64, limit: UsageLimit) -> f64 {
    match limit {
        UsageLimit::Unlimited => 0.0,
        UsageLimit::Bounded(0) => MAX_PERCENT,
        UsageLimit::Bounded(cap) => (current as f64 / cap as f64 * 100.0).min(MAX_PERCENT),
    }
}

/// Usage meter widget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageMeter {
    /// Label shown above the bar
    pub metric_name: String,
    /// Current count
    pub current: u64,
    /// Cap
    pub limit: UsageLimit,
    /// Subscriber tier
    pub tier: SubscriptionTier,
    /// Extra class on the root element
    pub class_name: Option<String>,
    /// Whether an upgrade prompt may ever be shown
    pub show_upgrade: bool,
}

impl UsageMeter {
    /// Meter with upgrade prompts enabled and no extra class
    #[must_use]
    pub fn new(
        metric_name: impl Into<String>,
        current: u64,
        limit: UsageLimit,
        tier: SubscriptionTier,
    ) -> Self {
        Self {
            metric_name: metric_name.into(),
            current,
            limit,
            tier,
            class_name: None,
            show_upgrade: true,
        }
    }

    /// Add a class to the root element
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Enable or suppress the upgrade prompt
    #[must_use]
    pub fn with_show_upgrade(mut self, show_upgrade: bool) -> Self {
        self.show_upgrade = show_upgrade;
        self
    }

    /// Compute the display state
    #[must_use]
    pub fn state(&self) -> UsageState {
        let percentage = usage_percentage(self.current, self.limit);
        let (is_unlimited, is_near_limit, is_at_limit) = match self.limit {
            UsageLimit::Unlimited => (true, false, false),
            UsageLimit::Bounded(cap) => (false, percentage >= NEAR_LIMIT_PERCENT, self.current >= cap),
        };

        let progress_color = if is_at_limit {
            ProgressColor::Red
        } else if is_near_limit {
            ProgressColor::Yellow
        } else {
            ProgressColor::Green
        };

        let upgrade = self
            .tier
            .next_tier()
            .filter(|_| self.show_upgrade && !is_unlimited && (is_near_limit || is_at_limit))
            .map(UpgradePrompt::for_tier);

        UsageState {
            metric_name: self.metric_name.clone(),
            current: self.current,
            limit: self.limit,
            tier: self.tier,
            percentage,
            is_unlimited,
            is_near_limit,
            is_at_limit,
            progress_color,
            upgrade,
        }
    }

    /// Render the widget as an HTML fragment
    #[must_use]
    pub fn render(&self, pricing_href: &str) -> String {
        let state = self.state();
        let metric = text(&self.metric_name);
        let metric_lower = self.metric_name.to_lowercase();
        let metric_lower = text(&metric_lower);

        let root_class = self
            .class_name
            .as_deref()
            .filter(|c| !c.is_empty())
            .map_or_else(|| "usage-meter".to_owned(), |c| format!("usage-meter {c}"));

        let count = match state.limit {
            UsageLimit::Unlimited => {
                r#"<span class="usage-meter__unlimited">Unlimited</span>"#.to_owned()
            }
            UsageLimit::Bounded(cap) => format!("{}/{cap}", state.current),
        };

        let mut html = format!(
            r#"<div class="{root_class}" data-tier="{tier}">
    <div class="usage-meter__header">
        <span class="usage-meter__label">{metric}</span>
        <span class="usage-meter__count">{count}</span>
    </div>
"#,
            root_class = attr(&root_class),
            tier = state.tier,
        );

        if !state.is_unlimited {
            let width = display_percent(state.percentage);
            let _ = write!(
                html,
                r#"    <div class="usage-meter__body">
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{width}">
            <div class="progress__indicator {color}" style="width: {width}%"></div>
        </div>
"#,
                color = state.progress_color.css_class(),
            );

            if state.is_at_limit {
                let _ = write!(
                    html,
                    r#"        <div class="alert alert--red" role="alert">You've reached your {metric_lower} limit.</div>
"#
                );
            } else if state.is_near_limit {
                let _ = write!(
                    html,
                    r#"        <div class="alert alert--yellow" role="alert">You're approaching your {metric_lower} limit.</div>
"#
                );
            }
            html.push_str("    </div>\n");
        }

        if let Some(prompt) = &state.upgrade {
            let _ = write!(
                html,
                r#"    <div class="usage-meter__upgrade">
        <p class="usage-meter__upgrade-title">Need more {metric_lower}?</p>
        <p class="usage-meter__upgrade-copy">{copy}</p>
        <a class="button" href="{pricing}">Upgrade</a>
    </div>
"#,
                copy = text(&prompt.copy()),
                pricing = attr(pricing_href),
            );
        }

        html.push_str("</div>\n");
        html
    }
}

/// Percentage rounded to two decimals without trailing zeros
fn display_percent(percentage: f64) -> f64 {
    (percentage * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter(current: u64, limit: Option<u64>, tier: SubscriptionTier) -> UsageMeter {
        UsageMeter::new("Active Projects", current, UsageLimit::from(limit), tier)
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert!((usage_percentage(50, UsageLimit::Bounded(200)) - 25.0).abs() < f64::EPSILON);
        assert!((usage_percentage(500, UsageLimit::Bounded(100)) - 100.0).abs() < f64::EPSILON);
        assert!(usage_percentage(7, UsageLimit::Unlimited).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_stays_in_range() {
        for cap in 1..=40_u64 {
            for current in 0..=60_u64 {
                let pct = usage_percentage(current, UsageLimit::Bounded(cap));
                assert!((0.0..=100.0).contains(&pct), "{current}/{cap} -> {pct}");
            }
        }
    }

    #[test]
    fn test_zero_limit_is_at_limit() {
        let state = meter(0, Some(0), SubscriptionTier::Free).state();
        assert!((state.percentage - 100.0).abs() < f64::EPSILON);
        assert!(state.is_at_limit);
        assert!(state.is_near_limit);
        assert_eq!(state.progress_color, ProgressColor::Red);
    }

    #[test]
    fn test_at_limit_uses_raw_counts() {
        for cap in 1..=50_u64 {
            for current in 0..=60_u64 {
                let state = meter(current, Some(cap), SubscriptionTier::Pro).state();
                assert_eq!(state.is_at_limit, current >= cap);
                if state.is_at_limit {
                    assert!(state.is_near_limit);
                }
            }
        }
    }

    #[test]
    fn test_near_limit_free_suggests_pro() {
        let state = meter(80, Some(100), SubscriptionTier::Free).state();
        assert!(state.is_near_limit);
        assert!(!state.is_at_limit);
        assert_eq!(state.progress_color, ProgressColor::Yellow);
        let prompt = state.upgrade.unwrap();
        assert_eq!(prompt.next_tier, SubscriptionTier::Pro);
        assert_eq!(prompt.copy(), "Upgrade to Pro for increased limits");
    }

    #[test]
    fn test_at_limit_pro_suggests_featured() {
        let state = meter(100, Some(100), SubscriptionTier::Pro).state();
        assert!(state.is_at_limit);
        assert_eq!(state.progress_color, ProgressColor::Red);
        let prompt = state.upgrade.unwrap();
        assert_eq!(prompt.next_tier, SubscriptionTier::Featured);
        assert_eq!(prompt.benefit, "unlimited");
        assert_eq!(prompt.copy(), "Upgrade to MyEdtr Verified for unlimited");
    }

    #[test]
    fn test_featured_never_prompts() {
        for current in [0, 50, 80, 99, 100, 150] {
            let state = meter(current, Some(100), SubscriptionTier::Featured).state();
            assert!(state.upgrade.is_none(), "current {current}");
        }
    }

    #[test]
    fn test_show_upgrade_false_suppresses_prompt() {
        for tier in [SubscriptionTier::Free, SubscriptionTier::Pro] {
            let state = meter(100, Some(100), tier).with_show_upgrade(false).state();
            assert!(state.is_at_limit);
            assert!(state.upgrade.is_none());
        }
    }

    #[test]
    fn test_below_threshold_is_green_without_prompt() {
        let state = meter(79, Some(100), SubscriptionTier::Free).state();
        assert!(!state.is_near_limit);
        assert_eq!(state.progress_color, ProgressColor::Green);
        assert!(state.upgrade.is_none());
    }

    #[test]
    fn test_unlimited_has_no_flags() {
        let state = meter(10_000, None, SubscriptionTier::Free).state();
        assert!(state.is_unlimited);
        assert!(!state.is_near_limit);
        assert!(!state.is_at_limit);
        assert!(state.upgrade.is_none());
    }

    #[test]
    fn test_render_unlimited_shows_label_only() {
        let html = meter(3, None, SubscriptionTier::Free).render("/pricing");
        assert!(html.contains("Unlimited"));
        assert!(!html.contains("progressbar"));
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("Upgrade"));
    }

    #[test]
    fn test_render_near_limit() {
        let html = meter(80, Some(100), SubscriptionTier::Free).render("/pricing");
        assert!(html.contains("80/100"));
        assert!(html.contains("bg-yellow-500"));
        assert!(html.contains(r#"style="width: 80%""#));
        assert!(html.contains("You're approaching your active projects limit."));
        assert!(!html.contains("You've reached"));
        assert!(html.contains("Need more active projects?"));
        assert!(html.contains("Upgrade to Pro for increased limits"));
        assert!(html.contains(r#"href="/pricing""#));
    }

    #[test]
    fn test_render_at_limit_shows_single_alert() {
        let html = meter(100, Some(100), SubscriptionTier::Pro).render("/pricing");
        assert!(html.contains("bg-red-500"));
        assert!(html.contains("You've reached your active projects limit."));
        assert!(!html.contains("You're approaching"));
        assert!(html.contains("Upgrade to MyEdtr Verified for unlimited"));
    }

    #[test]
    fn test_render_escapes_label_and_class() {
        let html = UsageMeter::new("<Uploads>", 1, UsageLimit::Bounded(10), SubscriptionTier::Free)
            .with_class(r#"mt-4" onload="x"#)
            .render("/pricing");
        assert!(html.contains("&lt;Uploads&gt;"));
        assert!(!html.contains(r#"onload="x""#));
    }

    #[test]
    fn test_display_percent_rounds() {
        assert!((display_percent(100.0 / 3.0) - 33.33).abs() < 1e-9);
    }
}
