// ABOUTME: Subscription tiers and usage limits for the usage meter
// ABOUTME: Tier succession is a fixed total order ending at Featured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::tiers;
use crate::errors::AppError;

/// Subscription level, ordered `Free < Pro < Featured`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free plan
    Free,
    /// Paid plan with increased limits
    Pro,
    /// Top plan with unlimited usage
    Featured,
}

impl SubscriptionTier {
    /// The tier an upgrade from this one leads to, `None` at the top
    #[must_use]
    pub const fn next_tier(self) -> Option<Self> {
        match self {
            Self::Free => Some(Self::Pro),
            Self::Pro => Some(Self::Featured),
            Self::Featured => None,
        }
    }

    /// Marketing name of the tier
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Featured => "MyEdtr Verified",
        }
    }

    /// Convert to string for storage and query strings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => tiers::FREE,
            Self::Pro => tiers::PRO,
            Self::Featured => tiers::FEATURED,
        }
    }
}

impl Display for SubscriptionTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            tiers::FREE => Ok(Self::Free),
            tiers::PRO => Ok(Self::Pro),
            tiers::FEATURED => Ok(Self::Featured),
            _ => Err(AppError::invalid_input(format!(
                "Invalid subscription tier: {s}"
            ))),
        }
    }
}

/// Cap on a usage metric
///
/// `Unlimited` is distinct from `Bounded(0)`: the first has no cap, the
/// second allows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<u64>")]
pub enum UsageLimit {
    /// Capped at the given count
    Bounded(u64),
    /// No cap
    Unlimited,
}

impl UsageLimit {
    /// Whether the metric has no cap
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// The cap, if any
    #[must_use]
    pub const fn cap(&self) -> Option<u64> {
        match self {
            Self::Bounded(cap) => Some(*cap),
            Self::Unlimited => None,
        }
    }
}

impl From<Option<u64>> for UsageLimit {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unlimited, Self::Bounded)
    }
}

// JSON keeps the nullable shape API consumers already expect
impl Serialize for UsageLimit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bounded(cap) => serializer.serialize_u64(*cap),
            Self::Unlimited => serializer.serialize_none(),
        }
    }
}

impl Display for UsageLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bounded(cap) => write!(f, "{cap}"),
            Self::Unlimited => f.write_str("Unlimited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_tier_succession() {
        assert_eq!(SubscriptionTier::Free.next_tier(), Some(SubscriptionTier::Pro));
        assert_eq!(
            SubscriptionTier::Pro.next_tier(),
            Some(SubscriptionTier::Featured)
        );
        assert_eq!(SubscriptionTier::Featured.next_tier(), None);
    }

    #[test]
    fn test_next_tier_is_always_higher() {
        for tier in [
            SubscriptionTier::Free,
            SubscriptionTier::Pro,
            SubscriptionTier::Featured,
        ] {
            if let Some(next) = tier.next_tier() {
                assert!(next > tier);
            }
        }
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("pro".parse::<SubscriptionTier>().unwrap(), SubscriptionTier::Pro);
        let err = "enterprise".parse::<SubscriptionTier>().unwrap_err();
        assert_eq!(err.message, "Invalid subscription tier: enterprise");
    }

    #[test]
    fn test_usage_limit_from_nullable() {
        assert_eq!(UsageLimit::from(None), UsageLimit::Unlimited);
        assert_eq!(UsageLimit::from(Some(0)), UsageLimit::Bounded(0));
        assert!(!UsageLimit::Bounded(0).is_unlimited());
    }

    #[test]
    fn test_usage_limit_json_shape() {
        assert_eq!(serde_json::to_string(&UsageLimit::Bounded(25)).unwrap(), "25");
        assert_eq!(serde_json::to_string(&UsageLimit::Unlimited).unwrap(), "null");
        let parsed: UsageLimit = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, UsageLimit::Unlimited);
    }
}
