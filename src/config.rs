//! Configuration management for artscout.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. All settings are read exactly once at process
//! start into an immutable [`Config`] struct that is passed into the token
//! manager, the discovery pipeline, and the web service; no deep call site
//! reads ambient environment state.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `artscout/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/artscout/.env`
/// - macOS: `~/Library/Application Support/artscout/.env`
/// - Windows: `%LOCALAPPDATA%/artscout/.env`
///
/// A missing `.env` file is not an error: in that case configuration must
/// come entirely from the ambient environment.
///
/// # Returns
///
/// Returns `Ok(())` unless the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artscout/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Variables may also arrive via the real environment.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Immutable application configuration, constructed once at startup.
///
/// Holds the Spotify application credentials, the upstream endpoint URLs and
/// the settings of the local OAuth web service. Cheap to clone; every string
/// is fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URI registered with the Spotify application.
    pub redirect_uri: String,
    /// Authorization endpoint, e.g. `https://accounts.spotify.com/authorize`.
    pub auth_url: String,
    /// Token endpoint, e.g. `https://accounts.spotify.com/api/token`.
    pub token_url: String,
    /// Web API base, e.g. `https://api.spotify.com/v1`.
    pub api_base_url: String,
    /// Bind address of the local web service, e.g. `127.0.0.1:8080`.
    pub server_addr: String,
    /// Secret used to sign session cookies.
    pub session_secret: String,
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable. Callers abort
    /// startup on failure; there are no defaults for credentials.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("CLIENT_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            redirect_uri: require("REDIRECT_URI")?,
            auth_url: require("AUTH_URL")?,
            token_url: require("TOKEN_URL")?,
            api_base_url: require("API_BASE_URL")?,
            server_addr: require("SERVER_ADDRESS")?,
            session_secret: require("SESSION_SECRET")?,
        })
    }

    /// Joins a path onto the API base URL, tolerating a trailing slash in
    /// the configured base.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.api_base_url.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
