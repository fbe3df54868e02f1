use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    discovery, error, info, spotify, success,
    types::{ArtistDetail, SmallArtistTableRow},
    utils, warning,
};

/// Runs the discovery pipeline end to end.
///
/// Acquires a client-credentials token, fetches recommendations for the
/// seed artists, aggregates the distinct artists referenced by the returned
/// tracks, batch-fetches their details (sequentially, at most 50 ids per
/// call), filters by the smallness thresholds, prints the survivors as a
/// table and persists them as CSV under a collision-avoided filename in the
/// working directory.
///
/// # Arguments
///
/// * `config` - Immutable application configuration
/// * `seed_uris` - Seed artist URIs of the form `spotify:artist:<id>`;
///   malformed entries are skipped with a diagnostic
/// * `limit` - Requested maximum number of recommended tracks
/// * `max_popularity` - Upstream popularity cap for recommended tracks
/// * `popularity_threshold` - Keep artists at or below this popularity
/// * `follower_threshold` - Keep artists at or below this follower count
///
/// # Fatal Paths
///
/// Token acquisition, the recommendation fetch and every artist-detail
/// chunk are fatal on failure: the run terminates via `error!` with the
/// upstream diagnostics. Partial results are never written.
pub async fn discover(
    config: &Config,
    seed_uris: Vec<String>,
    limit: u32,
    max_popularity: u8,
    popularity_threshold: u8,
    follower_threshold: u64,
) {
    let seed_artists = discovery::extract_artist_ids_from_uris(&seed_uris);
    if seed_artists.is_empty() {
        error!("No well-formed seed artist URIs given. Expected spotify:artist:<id>.");
    }

    let access_token = match spotify::auth::request_client_credentials_token(config).await {
        Ok(token) => token,
        Err(e) => {
            error!("{}", e);
        }
    };

    let pb = spinner("Fetching recommendations...");
    let tracks = match spotify::recommendations::get_recommendations(
        config,
        &access_token,
        &seed_artists,
        limit,
        max_popularity,
    )
    .await
    {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };
    info!("Got {} recommended tracks", tracks.len());

    let artist_ids = discovery::collect_artist_ids(&tracks);
    info!("{} distinct artists referenced", artist_ids.len());

    let batches = discovery::partition_batches(&artist_ids);
    let pb = ProgressBar::new(batches.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} fetching artist details {pos}/{len}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut all_artists: Vec<ArtistDetail> = Vec::new();
    for batch in batches {
        match spotify::artists::get_several_artists(config, &access_token, batch).await {
            Ok(mut artists) => all_artists.append(&mut artists),
            Err(e) => {
                pb.finish_and_clear();
                error!("{}", e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let small_artists =
        discovery::filter_small_artists(&all_artists, popularity_threshold, follower_threshold);

    if small_artists.is_empty() {
        warning!(
            "No artists at or below popularity {} and {} followers. Nothing to save.",
            popularity_threshold,
            follower_threshold
        );
        return;
    }

    let table_rows: Vec<SmallArtistTableRow> =
        small_artists.iter().map(SmallArtistTableRow::from).collect();
    println!("{}", Table::new(table_rows));

    let path = utils::generate_unique_filename(Path::new("."), "csv");
    if let Err(e) = async_fs::write(&path, utils::render_csv(&small_artists)).await {
        error!("Failed to save results: {}", e);
    }

    success!(
        "Discovered {} small artists. Data saved to {}",
        small_artists.len(),
        path.display()
    );
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
