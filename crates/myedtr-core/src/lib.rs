// ABOUTME: Core types and constants for the MyEdtr marketplace server
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

#![deny(unsafe_code)]

//! # `MyEdtr` Core
//!
//! Foundation crate providing shared types for the `MyEdtr` server. It holds
//! nothing that touches the network or the database directly, so it changes
//! rarely and compiles once.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Editor profiles, availability, subscription tiers, usage limits
//! - **constants**: Route targets, usage thresholds, and stored string values

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`EditorProfile`, `SubscriptionTier`, `UsageLimit`, ...)
pub mod models;
