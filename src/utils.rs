use std::path::{Path, PathBuf};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
use rand::distr::Alphanumeric;
use sha2::{Digest, Sha256};

use crate::types::SmallArtist;

/// Generates an opaque session identifier (32 alphanumeric characters).
pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Computes the signature for a session id using the configured secret.
pub fn sign_session_id(id: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(id.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Renders the signed cookie value `<id>.<sig>` for a session id.
pub fn make_session_cookie(id: &str, secret: &str) -> String {
    format!("{}.{}", id, sign_session_id(id, secret))
}

/// Verifies a signed cookie value and returns the embedded session id.
///
/// Returns `None` when the value is not of the form `<id>.<sig>` or the
/// signature does not match the secret.
pub fn verify_session_cookie(value: &str, secret: &str) -> Option<String> {
    let (id, sig) = value.split_once('.')?;
    if id.is_empty() || sign_session_id(id, secret) != sig {
        return None;
    }
    Some(id.to_string())
}

/// Extracts a named cookie from a `Cookie` request header value.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name { Some(value) } else { None }
    })
}

/// Percent-encodes a query component, leaving only unreserved characters
/// (ALPHA / DIGIT / `-` / `.` / `_` / `~`) untouched.
pub fn url_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Renders key/value pairs as a percent-encoded query string. Values may
/// carry spaces, separators or a whole nested query without splitting the
/// surrounding URL.
pub fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", url_encode(key), url_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Picks the first candidate filename that does not collide with an existing
/// file in `dir`. Candidate numbers become `<number>.<extension>`.
///
/// Returns `None` when the candidate stream runs dry, which the random
/// generator below never lets happen.
pub fn pick_unique_filename(
    dir: &Path,
    extension: &str,
    candidates: impl Iterator<Item = u32>,
) -> Option<PathBuf> {
    for number in candidates {
        let path = dir.join(format!("{}.{}", number, extension));
        if !path.exists() {
            return Some(path);
        }
    }
    None
}

/// Generates a collision-free output path in `dir` with a random 8-digit
/// numeric stem, regenerating on collision until a free name is found.
///
/// This is plain collision avoidance, not content addressing; names are not
/// deterministic across runs.
pub fn generate_unique_filename(dir: &Path, extension: &str) -> PathBuf {
    let mut rng = rand::rng();
    let candidates = std::iter::repeat_with(move || rng.random_range(10_000_000..100_000_000u32));
    // The iterator is infinite, so a free name always turns up.
    pick_unique_filename(dir, extension, candidates).unwrap()
}

/// Renders the small-artist result set as CSV: a header row of field names
/// followed by one row per artist. Genres are joined with `; ` into a single
/// cell.
pub fn render_csv(artists: &[SmallArtist]) -> String {
    let mut out = String::from("name,id,popularity,followers,genres,external_url\n");
    for artist in artists {
        let row = [
            csv_field(&artist.name),
            csv_field(&artist.id),
            artist.popularity.to_string(),
            artist.followers.to_string(),
            csv_field(&artist.genres.join("; ")),
            csv_field(&artist.external_url),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quotes a CSV field when it contains a delimiter, quote or newline;
/// embedded quotes are doubled.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
