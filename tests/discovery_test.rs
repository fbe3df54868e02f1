use artscout::discovery::*;
use artscout::types::{ArtistDetail, ExternalUrls, Followers, SmallArtist, Track, TrackArtist};

// Helper function to create a test track referencing the given artist ids
fn create_test_track(id: &str, artist_ids: &[&str]) -> Track {
    Track {
        id: id.to_string(),
        name: format!("{}_name", id),
        artists: artist_ids
            .iter()
            .map(|artist_id| TrackArtist {
                id: artist_id.to_string(),
                name: None,
            })
            .collect(),
    }
}

// Helper function to create a test artist record
fn create_test_artist(id: &str, name: &str, popularity: u8, followers: u64) -> ArtistDetail {
    ArtistDetail {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
        followers: Followers { total: followers },
        genres: vec!["lo-fi".to_string()],
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/artist/{}", id),
        },
    }
}

// Rebuilds an upstream-shaped record from a filtered result, so the filter
// can be applied a second time
fn detail_from_small(artist: &SmallArtist) -> ArtistDetail {
    ArtistDetail {
        id: artist.id.clone(),
        name: artist.name.clone(),
        popularity: artist.popularity,
        followers: Followers {
            total: artist.followers,
        },
        genres: artist.genres.clone(),
        external_urls: ExternalUrls {
            spotify: artist.external_url.clone(),
        },
    }
}

#[test]
fn test_parse_artist_uri_valid() {
    let id = parse_artist_uri("spotify:artist:08sk1ebt8DoanTgWdpdsEs").unwrap();
    assert_eq!(id, "08sk1ebt8DoanTgWdpdsEs");
}

#[test]
fn test_parse_artist_uri_invalid() {
    // Wrong namespace
    assert!(parse_artist_uri("deezer:artist:abc").is_err());

    // Wrong type tag
    assert!(parse_artist_uri("spotify:track:abc").is_err());

    // Too few / too many segments
    assert!(parse_artist_uri("spotify:artist").is_err());
    assert!(parse_artist_uri("spotify:artist:abc:extra").is_err());

    // Empty id
    assert!(parse_artist_uri("spotify:artist:").is_err());

    // The offending input is preserved in the error message
    let err = parse_artist_uri("bad:uri").unwrap_err();
    assert!(err.to_string().contains("bad:uri"));
}

#[test]
fn test_extract_artist_ids_skips_malformed() {
    let uris = vec![
        "spotify:artist:AAA".to_string(),
        "bad:uri".to_string(),
        "spotify:artist:BBB".to_string(),
    ];

    let ids = extract_artist_ids_from_uris(&uris);

    // Malformed entries are skipped, well-formed ids keep input order
    assert_eq!(ids, vec!["AAA", "BBB"]);
}

#[test]
fn test_extract_artist_ids_scenario() {
    // Seed list ["spotify:artist:AAA", "bad:uri"] yields ids ["AAA"],
    // a diagnostic, and no failure
    let uris = vec!["spotify:artist:AAA".to_string(), "bad:uri".to_string()];
    let ids = extract_artist_ids_from_uris(&uris);
    assert_eq!(ids, vec!["AAA"]);
}

#[test]
fn test_extract_artist_ids_all_malformed() {
    let uris = vec!["".to_string(), "spotify::x".to_string()];
    assert!(extract_artist_ids_from_uris(&uris).is_empty());
}

#[test]
fn test_collect_artist_ids_dedup() {
    let tracks = vec![
        create_test_track("t1", &["a1", "a2"]),
        create_test_track("t2", &["a2", "a3"]),
        create_test_track("t3", &["a1"]),
    ];

    let ids = collect_artist_ids(&tracks);

    // Each artist appears exactly once, in first-seen order
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[test]
fn test_partition_batches_counts() {
    // ceil(n/50) batches, each with at most 50 ids
    for n in [0usize, 1, 49, 50, 51, 100, 125] {
        let ids: Vec<String> = (0..n).map(|i| format!("id{}", i)).collect();
        let batches = partition_batches(&ids);

        assert_eq!(batches.len(), n.div_ceil(ARTIST_BATCH_SIZE));
        assert!(batches.iter().all(|b| b.len() <= ARTIST_BATCH_SIZE));

        // Concatenating the batches reproduces the input exactly, so the
        // union of per-batch results matches a single unbounded call
        let rejoined: Vec<String> = batches.concat();
        assert_eq!(rejoined, ids);
    }
}

#[test]
fn test_filter_small_artists_thresholds() {
    let artists = vec![
        create_test_artist("a1", "Tiny", 10, 500),
        create_test_artist("a2", "AtBoundary", 30, 10_000),
        create_test_artist("a3", "TooPopular", 31, 500),
        create_test_artist("a4", "TooFollowed", 10, 10_001),
    ];

    let small = filter_small_artists(&artists, 30, 10_000);

    // Both thresholds are inclusive; exceeding either one excludes
    let ids: Vec<&str> = small.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
}

#[test]
fn test_filter_small_artists_projection() {
    let artists = vec![create_test_artist("a1", "Tiny", 10, 500)];
    let small = filter_small_artists(&artists, 30, 10_000);

    assert_eq!(small.len(), 1);
    assert_eq!(small[0].name, "Tiny");
    assert_eq!(small[0].id, "a1");
    assert_eq!(small[0].popularity, 10);
    assert_eq!(small[0].followers, 500);
    assert_eq!(small[0].genres, vec!["lo-fi"]);
    assert_eq!(small[0].external_url, "https://open.spotify.com/artist/a1");
}

#[test]
fn test_filter_small_artists_idempotent() {
    let artists = vec![
        create_test_artist("a1", "Tiny", 10, 500),
        create_test_artist("a2", "Big", 90, 5_000_000),
        create_test_artist("a3", "Mid", 30, 9_999),
    ];

    let once = filter_small_artists(&artists, 30, 10_000);

    // Re-filtering an already-filtered set with the same thresholds yields
    // the identical set
    let as_details: Vec<ArtistDetail> = once.iter().map(detail_from_small).collect();
    let twice = filter_small_artists(&as_details, 30, 10_000);
    assert_eq!(once, twice);
}

#[test]
fn test_pipeline_dedup_end_to_end() {
    // An artist referenced by several tracks survives at most once
    let tracks = vec![
        create_test_track("t1", &["a1", "a2"]),
        create_test_track("t2", &["a1"]),
        create_test_track("t3", &["a2", "a1"]),
    ];

    let ids = collect_artist_ids(&tracks);
    assert_eq!(ids.len(), 2);

    let details: Vec<ArtistDetail> = ids
        .iter()
        .map(|id| create_test_artist(id, id, 5, 100))
        .collect();
    let small = filter_small_artists(&details, 30, 10_000);

    let mut result_ids: Vec<&str> = small.iter().map(|a| a.id.as_str()).collect();
    result_ids.sort();
    result_ids.dedup();
    assert_eq!(result_ids.len(), small.len());
}
