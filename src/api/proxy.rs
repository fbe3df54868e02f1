use std::sync::Arc;

use axum::{
    Extension, Json,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde_json::{Value, json};

use crate::{
    api::{error_body, session_id_from_headers},
    error::Error,
    management::TokenManager,
    server::AppState,
    spotify::REQUEST_TIMEOUT,
};

/// Relays the authenticated user's playlists (`me/playlists`).
pub async fn playlists(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    proxy_user_endpoint(&state, &headers, "me/playlists").await
}

/// Relays the authenticated user's top tracks over the medium term
/// (`me/top/tracks?time_range=medium_term&limit=50`).
pub async fn top_tracks(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    proxy_user_endpoint(&state, &headers, "me/top/tracks?time_range=medium_term&limit=50").await
}

/// Shared proxy path: resolve the session, make sure its token is valid
/// (refreshing if expired), issue one bearer GET and relay the JSON body
/// verbatim. Every failure turns into the structured error object; the
/// service keeps running.
async fn proxy_user_endpoint(state: &AppState, headers: &HeaderMap, path: &str) -> Response {
    let Some(session_id) = session_id_from_headers(headers, &state.config) else {
        return Json(json!({ "error": "missing session, start at /login" })).into_response();
    };

    let token = {
        let sessions = state.sessions.lock().await;
        sessions.get(&session_id).and_then(|s| s.token.clone())
    };
    let Some(token) = token else {
        return Json(json!({ "error": "not authenticated, start at /login" })).into_response();
    };

    let mut manager = TokenManager::new(&state.config, token);
    if let Err(e) = manager.ensure_valid().await {
        return error_body("Failed to refresh access token", &e).into_response();
    }
    let access_token = manager.access_token().to_string();

    // Store the possibly refreshed token back into the session.
    {
        let mut sessions = state.sessions.lock().await;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.token = Some(manager.into_token());
        }
    }

    let client = Client::new();
    let response = match client
        .get(state.config.api_url(path))
        .timeout(REQUEST_TIMEOUT)
        .bearer_auth(&access_token)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            return error_body("Upstream request failed", &Error::Http(e)).into_response();
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        let err = Error::Upstream { status, body };
        return error_body(
            &format!("Failed to fetch {}. Status code: {}", path, status.as_u16()),
            &err,
        )
        .into_response();
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Json(value).into_response(),
        Err(_) => {
            Json(json!({ "error": "Could not parse JSON", "response_text": body })).into_response()
        }
    }
}
