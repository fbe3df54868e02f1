use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Json,
    extract::Query,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::{
    api::{error_body, session_id_from_headers},
    server::AppState,
    spotify, warning,
};

/// Handles the redirect back from the upstream authorization server.
///
/// An `error` query parameter is a terminal failure: the session stays
/// anonymous and the error is echoed back as `{"error": ...}`. A `code`
/// parameter is exchanged for a token; on success the session becomes
/// authenticated and the browser is redirected to the top-tracks view.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    if let Some(error) = params.get("error") {
        return Json(json!({ "error": error })).into_response();
    }

    let Some(code) = params.get("code") else {
        return Json(json!({ "error": "missing code parameter" })).into_response();
    };

    let Some(session_id) = session_id_from_headers(&headers, &state.config) else {
        return Json(json!({ "error": "missing session, start at /login" })).into_response();
    };

    match spotify::auth::exchange_code(&state.config, code).await {
        Ok(token) => {
            let mut sessions = state.sessions.lock().await;
            let session = sessions.entry(session_id).or_default();
            session.token = Some(token);
            Redirect::to("/top-tracks").into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            error_body("Failed to exchange authorization code", &e).into_response()
        }
    }
}
