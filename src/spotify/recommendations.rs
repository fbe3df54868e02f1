use reqwest::Client;

use crate::{
    config::Config,
    error::Error,
    spotify::REQUEST_TIMEOUT,
    types::{RecommendationsResponse, Track},
};

/// Fetches recommended tracks for a set of seed artists.
///
/// Issues one `GET /recommendations` with `seed_artists` (comma-joined ids),
/// `limit` and `max_popularity` as query parameters, authenticated with the
/// supplied bearer token. The upstream caps how many seeds one call accepts;
/// the caller is expected to pass a small list.
///
/// # Arguments
///
/// * `config` - Application configuration with the API base URL
/// * `token` - Client-credentials access token
/// * `seed_artists` - Artist ids extracted from the seed URIs
/// * `limit` - Requested maximum number of tracks
/// * `max_popularity` - Upstream-side popularity cap for recommended tracks
///
/// # Returns
///
/// The ordered sequence of recommended tracks as returned by the API.
///
/// # Errors
///
/// Any non-success status maps to [`Error::Recommendation`] with the raw
/// response body; the discovery pipeline treats this as fatal.
pub async fn get_recommendations(
    config: &Config,
    token: &str,
    seed_artists: &[String],
    limit: u32,
    max_popularity: u8,
) -> Result<Vec<Track>, Error> {
    let api_url = format!(
        "{url}?seed_artists={seeds}&limit={limit}&max_popularity={max_popularity}",
        url = config.api_url("recommendations"),
        seeds = seed_artists.join(","),
        limit = limit,
        max_popularity = max_popularity
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .timeout(REQUEST_TIMEOUT)
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Recommendation { status, body });
    }

    let res = response.json::<RecommendationsResponse>().await?;
    Ok(res.tracks)
}
