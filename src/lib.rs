// ABOUTME: Main library entry point for the MyEdtr marketplace server
// ABOUTME: Server-rendered editor profile pages and the subscription usage meter widget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyEdtr

#![deny(unsafe_code)]

//! # `MyEdtr` Server
//!
//! HTTP server for a freelance video-editor marketplace. It renders two things:
//!
//! - **Editor profile pages**: one store read per request, joined with the
//!   editor's account, rendered into header, about, portfolio, reviews,
//!   stats, and contact sections. Missing profiles get the not-found page.
//! - **Usage meter widget**: a pure function of current usage, an optional
//!   limit, and the subscription tier that decides the progress colour, the
//!   limit alerts, and whether to suggest the next tier.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use myedtr_server::config::environment::ServerConfig;
//! use myedtr_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("MyEdtr server configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-only configuration (server, database)
pub mod config;

/// Application constants re-exported from `myedtr-core`
pub mod constants {
    pub use myedtr_core::constants::*;
}

/// `SQLite` persistence and the profile store seam
pub mod database;

/// Unified error handling re-exported from `myedtr-core`
pub mod errors {
    pub use myedtr_core::errors::*;
}

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Domain models re-exported from `myedtr-core`
pub mod models {
    pub use myedtr_core::models::*;
}

/// HTML rendering for pages and widgets
pub mod render;

/// Shared resource container for route state
pub mod resources;

/// HTTP route handlers grouped by domain
pub mod routes;

/// Router assembly and the serve loop
pub mod server;
