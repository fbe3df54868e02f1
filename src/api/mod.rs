//! # API Module
//!
//! HTTP endpoints of the OAuth web service. The service drives the
//! authorization-code flow against Spotify and proxies two downstream reads
//! on behalf of the authenticated user.
//!
//! ## Endpoints
//!
//! - [`index`] - Static landing page with a login link
//! - [`login`] - Creates a session and redirects to the upstream
//!   authorization URL (scopes `user-read-private user-read-email
//!   user-top-read`, consent dialog forced)
//! - [`callback`] - Receives the authorization code (or an error), exchanges
//!   it for a token and stores it in the session
//! - [`playlists`] / [`top_tracks`] - Ensure the session token is valid,
//!   then relay `me/playlists` resp. `me/top/tracks` verbatim
//! - [`health`] - Status endpoint for monitoring
//!
//! ## Sessions
//!
//! Each handler receives the session explicitly: the transport supplies an
//! opaque id in a signed `sid` cookie, which is looked up in the in-memory
//! store held by [`crate::server::AppState`]. The core logic never touches
//! a transport-level session mechanism directly.
//!
//! ## Error Handling
//!
//! Upstream failures never terminate the service. Every error converts into
//! a structured JSON object `{error, status_code, response_text}` via
//! [`error_body`] and the request completes normally.

mod callback;
mod health;
mod index;
mod login;
mod proxy;

pub use callback::callback;
pub use health::health;
pub use index::index;
pub use login::login;
pub use proxy::{playlists, top_tracks};

use axum::{Json, http::HeaderMap, http::header};
use serde_json::{Value, json};

use crate::{config::Config, error::Error, utils};

/// Extracts and verifies the session id from the request's `sid` cookie.
pub(crate) fn session_id_from_headers(headers: &HeaderMap, config: &Config) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    let value = utils::cookie_value(cookie_header, "sid")?;
    utils::verify_session_cookie(value, &config.session_secret)
}

/// Builds the structured JSON error object returned by the web endpoints.
pub(crate) fn error_body(context: &str, err: &Error) -> Json<Value> {
    Json(json!({
        "error": context,
        "status_code": err.status().map(|s| s.as_u16()),
        "response_text": err.response_text(),
    }))
}
