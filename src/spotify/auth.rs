use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Config,
    error::Error,
    spotify::REQUEST_TIMEOUT,
    types::{Token, TokenResponse},
};

/// Acquires an application access token via the client-credentials grant.
///
/// Performs a single token-endpoint exchange authenticated with an HTTP
/// Basic header of `base64(client_id:client_secret)` and
/// `grant_type=client_credentials`. No user context and no refresh token are
/// involved; the discovery pipeline uses one such token per run.
///
/// # Arguments
///
/// * `config` - Application configuration holding the credentials and the
///   token endpoint URL
///
/// # Returns
///
/// Returns the bare access token string on success.
///
/// # Errors
///
/// Any non-success status maps to [`Error::Authentication`] carrying the
/// status and raw response body. Callers in the discovery pipeline treat
/// this as fatal.
pub async fn request_client_credentials_token(config: &Config) -> Result<String, Error> {
    let auth_header = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .timeout(REQUEST_TIMEOUT)
        .header("Authorization", format!("Basic {}", auth_header))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Authentication { status, body });
    }

    let token: TokenResponse = res.json().await?;
    Ok(token.access_token)
}

/// Exchanges a one-time authorization code for a user token.
///
/// Completes the authorization-code grant after the `/callback` endpoint
/// receives the code: posts the code together with the redirect URI and the
/// client credentials and anchors the returned `expires_in` to an absolute
/// `expires_at` timestamp.
///
/// # Errors
///
/// Any non-success status maps to [`Error::Authentication`] carrying the
/// status and raw response body.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, Error> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .timeout(REQUEST_TIMEOUT)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Authentication { status, body });
    }

    let resp: TokenResponse = res.json().await?;
    Ok(Token::from_response(resp, Utc::now().timestamp()))
}

/// Exchanges a refresh token for a fresh access token.
///
/// Unlike the acquisition grants this never aborts anything: a non-success
/// response degrades to [`Error::Refresh`] with status and body, which the
/// web endpoints relay to the caller as a structured error payload.
pub async fn refresh_grant(config: &Config, refresh_token: &str) -> Result<TokenResponse, Error> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .timeout(REQUEST_TIMEOUT)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Refresh { status, body });
    }

    Ok(res.json::<TokenResponse>().await?)
}
