use reqwest::Client;

use crate::{
    config::Config,
    error::Error,
    spotify::REQUEST_TIMEOUT,
    types::{ArtistDetail, SeveralArtistsResponse},
};

/// Retrieves full artist records for one batch of artist ids.
///
/// Issues a single `GET /artists` with the ids comma-joined into the `ids`
/// query parameter. The upstream accepts at most 50 ids per call; callers
/// partition larger sets with [`crate::discovery::partition_batches`] and
/// invoke this once per chunk, sequentially.
///
/// # Returns
///
/// The artist records for this batch, in the order returned by the API.
///
/// # Errors
///
/// Any non-success status maps to [`Error::ArtistLookup`] with the raw
/// response body. A failing chunk aborts the whole pipeline; partial results
/// are not salvaged.
pub async fn get_several_artists(
    config: &Config,
    token: &str,
    ids: &[String],
) -> Result<Vec<ArtistDetail>, Error> {
    let api_url = format!(
        "{url}?ids={ids}",
        url = config.api_url("artists"),
        ids = ids.join(",")
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
        return Err(Error::ArtistLookup { status, body });
    }

    let res = response.json::<SeveralArtistsResponse>().await?;
    Ok(res.artists)
}
