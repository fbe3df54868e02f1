use reqwest::StatusCode;
use thiserror::Error;

/// Error taxonomy shared by the discovery pipeline and the OAuth web service.
///
/// The discovery pipeline treats every upstream failure as fatal; the web
/// service converts the same errors into structured JSON payloads and keeps
/// running. `MalformedUri` is the one recoverable case: callers skip the
/// offending item with a diagnostic and continue.
#[derive(Error, Debug)]
pub enum Error {
    /// Token-endpoint non-success during acquisition. Status and raw
    /// response body are preserved for diagnosability.
    #[error("Failed to authenticate with Spotify API ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    /// The recommendations endpoint returned a non-success status.
    #[error("Failed to get recommendations ({status}): {body}")]
    Recommendation { status: StatusCode, body: String },

    /// A batched artist-detail request returned a non-success status.
    #[error("Failed to get artist details ({status}): {body}")]
    ArtistLookup { status: StatusCode, body: String },

    /// Token refresh failed. Unlike acquisition this never aborts; endpoint
    /// handlers relay status and body to the caller.
    #[error("Failed to refresh access token ({status}): {body}")]
    Refresh { status: StatusCode, body: String },

    /// Any other upstream non-success status (proxied endpoints).
    #[error("Upstream request failed ({status}): {body}")]
    Upstream { status: StatusCode, body: String },

    /// A seed-artist URI that does not match `spotify:artist:<id>`.
    #[error("Invalid URI format: {0}")]
    MalformedUri(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Upstream HTTP status associated with this error, where one exists.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Authentication { status, .. }
            | Error::Recommendation { status, .. }
            | Error::ArtistLookup { status, .. }
            | Error::Refresh { status, .. }
            | Error::Upstream { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Raw upstream response body, where one was captured.
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Error::Authentication { body, .. }
            | Error::Recommendation { body, .. }
            | Error::ArtistLookup { body, .. }
            | Error::Refresh { body, .. }
            | Error::Upstream { body, .. } => Some(body),
            _ => None,
        }
    }
}
