use std::fs;
use std::path::PathBuf;

use artscout::types::SmallArtist;
use artscout::utils::*;

// Helper function to create a scratch directory for filename tests
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("artscout_test_{}_{}", tag, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn create_test_artist(name: &str, genres: &[&str]) -> SmallArtist {
    SmallArtist {
        name: name.to_string(),
        id: "a1".to_string(),
        popularity: 12,
        followers: 340,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        external_url: "https://open.spotify.com/artist/a1".to_string(),
    }
}

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    // Should be exactly 32 alphanumeric characters
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated ids should be different
    assert_ne!(id, generate_session_id());
}

#[test]
fn test_session_cookie_roundtrip() {
    let cookie = make_session_cookie("abc123", "secret");

    // Cookie embeds the id and a signature
    assert!(cookie.starts_with("abc123."));

    // Verifies with the right secret
    assert_eq!(
        verify_session_cookie(&cookie, "secret"),
        Some("abc123".to_string())
    );

    // Rejected with a different secret
    assert_eq!(verify_session_cookie(&cookie, "other"), None);
}

#[test]
fn test_session_cookie_tampering() {
    let cookie = make_session_cookie("abc123", "secret");
    let sig = cookie.split_once('.').unwrap().1;

    // Swapping the id invalidates the signature
    let forged = format!("zzz999.{}", sig);
    assert_eq!(verify_session_cookie(&forged, "secret"), None);

    // Garbage shapes are rejected
    assert_eq!(verify_session_cookie("no-dot-here", "secret"), None);
    assert_eq!(verify_session_cookie(".justasig", "secret"), None);
}

#[test]
fn test_cookie_value() {
    let header = "foo=1; sid=abc.def; theme=dark";

    assert_eq!(cookie_value(header, "sid"), Some("abc.def"));
    assert_eq!(cookie_value(header, "foo"), Some("1"));
    assert_eq!(cookie_value(header, "missing"), None);

    // Name must match exactly, not by prefix
    assert_eq!(cookie_value("sidecar=1", "sid"), None);
}

#[test]
fn test_url_encode() {
    // Unreserved characters pass through
    assert_eq!(url_encode("abcXYZ019-._~"), "abcXYZ019-._~");

    // Spaces and reserved characters are percent-encoded
    assert_eq!(url_encode("a b"), "a%20b");
    assert_eq!(url_encode("a&b=c?d/e:f"), "a%26b%3Dc%3Fd%2Fe%3Af");

    // Multi-byte characters are encoded per UTF-8 byte
    assert_eq!(url_encode("ü"), "%C3%BC");
}

#[test]
fn test_form_urlencode() {
    let query = form_urlencode(&[
        ("response_type", "code"),
        ("scope", "user-read-private user-top-read"),
        ("redirect_uri", "https://app.example/callback?env=prod&tab=top"),
    ]);

    // Pairs are joined with & and every value is encoded, so a redirect URI
    // carrying its own query stays a single parameter
    assert_eq!(
        query,
        "response_type=code\
         &scope=user-read-private%20user-top-read\
         &redirect_uri=https%3A%2F%2Fapp.example%2Fcallback%3Fenv%3Dprod%26tab%3Dtop"
    );
}

#[test]
fn test_pick_unique_filename_skips_existing() {
    let dir = scratch_dir("pick");

    // Simulate a collision on the first candidate
    fs::write(dir.join("11111111.csv"), "taken").unwrap();

    let picked = pick_unique_filename(&dir, "csv", [11111111u32, 22222222].into_iter()).unwrap();
    assert_eq!(picked, dir.join("22222222.csv"));

    // A free first candidate is used as-is
    let picked = pick_unique_filename(&dir, "csv", [33333333u32].into_iter()).unwrap();
    assert_eq!(picked, dir.join("33333333.csv"));

    // An exhausted candidate stream yields nothing
    assert!(pick_unique_filename(&dir, "csv", [11111111u32].into_iter()).is_none());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_unique_filename() {
    let dir = scratch_dir("gen");

    let path = generate_unique_filename(&dir, "csv");

    // Never collides with an existing file
    assert!(!path.exists());

    // Random 8-digit numeric stem plus the fixed extension
    assert_eq!(path.extension().unwrap(), "csv");
    let stem = path.file_stem().unwrap().to_str().unwrap();
    assert_eq!(stem.len(), 8);
    assert!(stem.chars().all(|c| c.is_ascii_digit()));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_csv_field_quoting() {
    // Plain values pass through
    assert_eq!(csv_field("plain"), "plain");

    // Delimiters force quoting
    assert_eq!(csv_field("a,b"), "\"a,b\"");

    // Embedded quotes are doubled
    assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");

    // Newlines force quoting
    assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
}

#[test]
fn test_render_csv() {
    let artists = vec![
        create_test_artist("Quiet Act", &["ambient", "drone"]),
        create_test_artist("Loud, Quiet", &[]),
    ];

    let csv = render_csv(&artists);
    let lines: Vec<&str> = csv.lines().collect();

    // Header row lists the persisted field names
    assert_eq!(lines[0], "name,id,popularity,followers,genres,external_url");
    assert_eq!(lines.len(), 3);

    // Genres are joined into one cell
    assert!(lines[1].contains("ambient; drone"));

    // A comma inside a name gets quoted
    assert!(lines[2].starts_with("\"Loud, Quiet\""));
}

#[test]
fn test_render_csv_empty() {
    // An empty result set still produces the header row
    let csv = render_csv(&[]);
    assert_eq!(csv, "name,id,popularity,followers,genres,external_url\n");
}
