//! Pure steps of the small-artist discovery pipeline.
//!
//! Everything here is synchronous and side-effect free so the pipeline can
//! be tested without a network: seed-URI parsing, artist-id aggregation
//! across tracks, batching for the artists endpoint, and the smallness
//! filter. The HTTP calls between these steps live in [`crate::spotify`],
//! the orchestration in [`crate::cli`].

use std::collections::HashSet;

use crate::{
    error::Error,
    types::{ArtistDetail, SmallArtist, Track},
    warning,
};

/// Maximum number of artist ids the upstream artists endpoint accepts per
/// call.
pub const ARTIST_BATCH_SIZE: usize = 50;

/// Default popularity cutoff for the smallness filter.
pub const DEFAULT_POPULARITY_THRESHOLD: u8 = 30;

/// Default follower cutoff for the smallness filter.
pub const DEFAULT_FOLLOWER_THRESHOLD: u64 = 10_000;

/// Parses a single seed-artist URI of the form `spotify:artist:<id>`.
///
/// The URI must consist of exactly three colon-delimited segments with the
/// literal `spotify` and `artist` tags and a non-empty id.
///
/// # Errors
///
/// Returns [`Error::MalformedUri`] carrying the offending input.
pub fn parse_artist_uri(uri: &str) -> Result<String, Error> {
    let parts: Vec<&str> = uri.split(':').collect();
    match parts.as_slice() {
        ["spotify", "artist", id] if !id.is_empty() => Ok((*id).to_string()),
        _ => Err(Error::MalformedUri(uri.to_string())),
    }
}

/// Extracts artist ids from a list of seed URIs, preserving input order.
///
/// Malformed entries are skipped with a diagnostic and never abort the run.
pub fn extract_artist_ids_from_uris(uris: &[String]) -> Vec<String> {
    let mut artist_ids = Vec::new();
    for uri in uris {
        match parse_artist_uri(uri) {
            Ok(id) => artist_ids.push(id),
            Err(e) => warning!("{}", e),
        }
    }
    artist_ids
}

/// Collects the distinct artist ids referenced across all tracks' artist
/// lists, deduplicated by id in first-seen order.
pub fn collect_artist_ids(tracks: &[Track]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for track in tracks {
        for artist in &track.artists {
            if seen.insert(artist.id.clone()) {
                ids.push(artist.id.clone());
            }
        }
    }
    ids
}

/// Partitions artist ids into chunks the artists endpoint accepts, i.e.
/// `ceil(n / 50)` batches of at most [`ARTIST_BATCH_SIZE`] ids each.
pub fn partition_batches(ids: &[String]) -> Vec<&[String]> {
    ids.chunks(ARTIST_BATCH_SIZE).collect()
}

/// Keeps only artists at or below both thresholds and projects them into the
/// persisted [`SmallArtist`] shape.
///
/// Re-filtering an already-filtered set with the same thresholds yields the
/// identical set.
pub fn filter_small_artists(
    artists: &[ArtistDetail],
    popularity_threshold: u8,
    follower_threshold: u64,
) -> Vec<SmallArtist> {
    artists
        .iter()
        .filter(|artist| {
            artist.popularity <= popularity_threshold
                && artist.followers.total <= follower_threshold
        })
        .map(|artist| SmallArtist {
            name: artist.name.clone(),
            id: artist.id.clone(),
            popularity: artist.popularity,
            followers: artist.followers.total,
            genres: artist.genres.clone(),
            external_url: artist.external_urls.spotify.clone(),
        })
        .collect()
}
