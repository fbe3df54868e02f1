use axum::{Extension, Router, routing::get};
use std::{collections::HashMap, net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config::Config, error, types::Session};

/// Shared state of the OAuth web service: the immutable configuration and
/// the in-memory session store keyed by opaque session ids.
pub struct AppState {
    pub config: Config,
    pub sessions: Mutex<HashMap<String, Session>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

/// Starts the OAuth web service and blocks until externally terminated.
pub async fn start_api_server(config: Config) {
    let state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/playlists", get(api::playlists))
        .route("/top-tracks", get(api::top_tracks))
        .route("/health", get(api::health))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
