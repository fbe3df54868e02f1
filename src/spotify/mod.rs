//! # Spotify Integration Module
//!
//! This module is the HTTP layer between artscout and the Spotify Web API.
//! It covers the three token grants and the two read endpoints the discovery
//! pipeline needs, leaving orchestration to the CLI and web-service layers.
//!
//! ## Core Modules
//!
//! - [`auth`] - Token-endpoint grants: client-credentials acquisition,
//!   authorization-code exchange, and refresh. Client-credentials requests
//!   authenticate with an HTTP Basic header of `base64(client_id:client_secret)`;
//!   the other grants send credentials in the form body.
//! - [`recommendations`] - Seed-based track recommendations
//!   (`GET /recommendations` with `seed_artists`, `limit`, `max_popularity`).
//! - [`artists`] - Batched artist-detail lookup (`GET /artists?ids=...`,
//!   at most 50 ids per call).
//!
//! ## Error Handling
//!
//! Every function checks the response status itself and maps non-success
//! responses to the matching [`crate::error::Error`] variant, preserving the
//! raw response body for diagnosability. Network-level failures surface as
//! `Error::Http`. There is no retry or rate-limit handling; a failed call is
//! the caller's problem.
//!
//! ## Timeouts
//!
//! The upstream contract specifies no timeout, so each request carries an
//! explicit 30-second limit ([`REQUEST_TIMEOUT`]) instead of relying on the
//! HTTP client's default.
//!
//! ## Configuration
//!
//! All endpoint URLs and credentials come from the immutable
//! [`crate::config::Config`] passed by reference into every function; the
//! module never reads environment state.

use std::time::Duration;

pub mod artists;
pub mod auth;
pub mod recommendations;

/// Explicit per-request timeout for every upstream call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
