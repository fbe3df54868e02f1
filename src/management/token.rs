use chrono::Utc;
use reqwest::StatusCode;

use crate::{config::Config, error::Error, spotify, types::Token};

/// Owns one session's token and refreshes it on demand.
pub struct TokenManager {
    config: Config,
    token: Token,
}

impl TokenManager {
    pub fn new(config: &Config, token: Token) -> Self {
        TokenManager {
            config: config.clone(),
            token,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.token.is_expired()
    }

    /// Exchanges the stored refresh token for a new access token and expiry.
    ///
    /// The refresh token itself is kept unless the response carries a new
    /// one; the upstream is not assumed to rotate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Refresh`] with the upstream status and body, or when
    /// the session never received a refresh token. Never aborts the process.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let Some(refresh_token) = self.token.refresh_token.clone() else {
            return Err(Error::Refresh {
                status: StatusCode::UNAUTHORIZED,
                body: "no refresh token stored for this session".to_string(),
            });
        };

        let resp = spotify::auth::refresh_grant(&self.config, &refresh_token).await?;
        self.token = Token {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token.or(Some(refresh_token)),
            expires_at: Utc::now().timestamp() + resp.expires_in,
        };
        Ok(())
    }

    /// Refreshes the token if it is expired, otherwise does nothing.
    ///
    /// Refresh failures are propagated, not swallowed; each endpoint handler
    /// decides how to present them.
    pub async fn ensure_valid(&mut self) -> Result<(), Error> {
        if self.is_expired() {
            self.refresh().await
        } else {
            Ok(())
        }
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    /// Hands the (possibly refreshed) token back to the session store.
    pub fn into_token(self) -> Token {
        self.token
    }
}
