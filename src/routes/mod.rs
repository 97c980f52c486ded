// ABOUTME: Route module organization for MyEdtr HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the render layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

//! Route module for the MyEdtr server
//!
//! Handlers parse the request, call into [`crate::render`], and map the
//! outcome to a response.

/// Editor profile pages
pub mod editors;
/// Health check and system status routes
pub mod health;
/// Usage meter widget and JSON view
pub mod usage;

/// Editor profile route handlers
pub use editors::EditorRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Usage meter route handlers
pub use usage::{UsageMeterQuery, UsageMeterRoutes};
