// ABOUTME: HTTP middleware for the MyEdtr router
// ABOUTME: Currently cross-origin configuration only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

/// CORS layer built from server configuration
pub mod cors;

pub use cors::setup_cors;
