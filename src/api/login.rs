use std::sync::Arc;

use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Redirect},
};

use crate::{server::AppState, types::Session, utils};

/// Scopes requested during user authorization.
const SCOPE: &str = "user-read-private user-read-email user-top-read";

/// Starts the authorization-code flow for a fresh session.
///
/// Creates a new anonymous session, hands its signed id to the browser as a
/// `sid` cookie and redirects to the upstream authorization URL with
/// `response_type=code` and the consent dialog forced (`show_dialog=true`).
pub async fn login(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let session_id = utils::generate_session_id();
    {
        let mut sessions = state.sessions.lock().await;
        sessions.insert(session_id.clone(), Session::default());
    }

    let cookie = format!(
        "sid={}; Path=/; HttpOnly",
        utils::make_session_cookie(&session_id, &state.config.session_secret)
    );

    // Every value is percent-encoded; a redirect URI carrying its own query
    // must survive as one parameter.
    let query = utils::form_urlencode(&[
        ("client_id", state.config.client_id.as_str()),
        ("response_type", "code"),
        ("scope", SCOPE),
        ("redirect_uri", state.config.redirect_uri.as_str()),
        ("show_dialog", "true"),
    ]);
    let auth_url = format!("{}?{}", state.config.auth_url, query);

    ([(header::SET_COOKIE, cookie)], Redirect::to(&auth_url))
}
