use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Raw body of a successful token-endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

/// A bearer token with an absolute expiry timestamp.
///
/// Owned exclusively by whichever flow acquired it: the discovery pipeline
/// holds one ephemeral access token per run, the web service one token per
/// user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: i64,
}

impl Token {
    /// Builds a token from a token-endpoint response, anchoring the expiry
    /// at `now + expires_in`.
    pub fn from_response(resp: TokenResponse, now: i64) -> Self {
        Token {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            expires_at: now + resp.expires_in,
        }
    }

    /// Expiry check against a supplied clock. The boundary `now == expires_at`
    /// counts as not expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }
}

/// Per-session state of the OAuth web service. A session starts anonymous
/// (`token` unset) and becomes authenticated once `/callback` stores a token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<ArtistDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    pub name: String,
    pub popularity: u8,
    pub followers: Followers,
    #[serde(default)]
    pub genres: Vec<String>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

/// A discovered artist that passed both smallness thresholds, projected into
/// the shape persisted to the CSV artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallArtist {
    pub name: String,
    pub id: String,
    pub popularity: u8,
    pub followers: u64,
    pub genres: Vec<String>,
    pub external_url: String,
}

#[derive(Tabled)]
pub struct SmallArtistTableRow {
    pub name: String,
    pub popularity: u8,
    pub followers: u64,
    pub genres: String,
}

impl From<&SmallArtist> for SmallArtistTableRow {
    fn from(artist: &SmallArtist) -> Self {
        SmallArtistTableRow {
            name: artist.name.clone(),
            popularity: artist.popularity,
            followers: artist.followers,
            genres: artist
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}
