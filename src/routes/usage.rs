// ABOUTME: Usage meter widget routes: embeddable HTML fragment and JSON state
// ABOUTME: Query strings are validated into a UsageMeter; bad input is a 400 JSON error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use crate::errors::{AppError, ErrorCode};
use crate::models::{SubscriptionTier, UsageLimit};
use crate::render::{UsageMeter, UsageState};
use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Raw usage meter query string
///
/// Every field arrives as text so validation failures become [`AppError`]s
/// rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct UsageMeterQuery {
    /// Metric label
    pub metric: Option<String>,
    /// Current count
    pub current: Option<String>,
    /// Cap; absent or empty means unlimited
    pub limit: Option<String>,
    /// Subscriber tier
    pub tier: Option<String>,
    /// Extra class for the root element
    pub class: Option<String>,
    /// `true`/`false` (also `1`/`0`); defaults to `true`
    pub show_upgrade: Option<String>,
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    value.filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        AppError::new(
            ErrorCode::MissingRequiredField,
            format!("Missing query parameter: {field}"),
        )
    })
}

fn parse_count(value: &str, field: &str) -> Result<u64, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{field} must be a non-negative integer, got {value:?}"),
        )
    })
}

fn parse_flag(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::new(
            ErrorCode::InvalidFormat,
            format!("show_upgrade must be true or false, got {other:?}"),
        )),
    }
}

impl TryFrom<UsageMeterQuery> for UsageMeter {
    type Error = AppError;

    fn try_from(query: UsageMeterQuery) -> Result<Self, Self::Error> {
        let metric = required(query.metric.as_deref(), "metric")?;
        let current = parse_count(required(query.current.as_deref(), "current")?, "current")?;
        let tier: SubscriptionTier = required(query.tier.as_deref(), "tier")?.trim().parse()?;

        let limit = match query.limit.as_deref().map(str::trim) {
            None | Some("") => UsageLimit::Unlimited,
            Some(raw) => UsageLimit::Bounded(parse_count(raw, "limit")?),
        };

        let mut meter = Self::new(metric, current, limit, tier);
        if let Some(class) = query.class.filter(|c| !c.trim().is_empty()) {
            meter = meter.with_class(class);
        }
        if let Some(flag) = query.show_upgrade.as_deref() {
            meter = meter.with_show_upgrade(parse_flag(flag)?);
        }
        Ok(meter)
    }
}

/// Usage meter routes handler
pub struct UsageMeterRoutes;

impl UsageMeterRoutes {
    /// Create usage meter routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/widgets/usage-meter", get(Self::handle_widget))
            .route("/api/usage-meter", get(Self::handle_state))
            .with_state(resources)
    }

    /// Handle GET /widgets/usage-meter - HTML fragment
    async fn handle_widget(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<UsageMeterQuery>,
    ) -> Result<Html<String>, AppError> {
        let meter = UsageMeter::try_from(query)?;
        Ok(Html(meter.render(&resources.config.links.pricing)))
    }

    /// Handle GET /api/usage-meter - computed state as JSON
    async fn handle_state(
        Query(query): Query<UsageMeterQuery>,
    ) -> Result<Json<UsageState>, AppError> {
        let meter = UsageMeter::try_from(query)?;
        Ok(Json(meter.state()))
    }
}
