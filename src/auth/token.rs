//! Credential handling and access-token caching.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{Environment, Error, Result};

/// REST application credentials.
///
/// Supplied once when the client is constructed and immutable for its
/// lifetime. The secret is held as a [`SecretString`] and never appears
/// in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// OAuth2 client id of the REST application
    pub client_id: String,
    client_secret: SecretString,
    /// Which PayPal environment these credentials belong to
    pub environment: Environment,
}

impl Credentials {
    /// Create credentials for the given environment.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            environment,
        }
    }

    /// Read credentials from `PAYPAL_CLIENT_ID`, `PAYPAL_CLIENT_SECRET`
    /// and (optionally) `PAYPAL_ENVIRONMENT`.
    ///
    /// `PAYPAL_ENVIRONMENT` accepts `sandbox` (the default when unset)
    /// or `live`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a required variable is missing.
    /// No network call is attempted.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("PAYPAL_CLIENT_ID")
            .map_err(|_| Error::Config("PAYPAL_CLIENT_ID is not set".into()))?;
        let client_secret = std::env::var("PAYPAL_CLIENT_SECRET")
            .map_err(|_| Error::Config("PAYPAL_CLIENT_SECRET is not set".into()))?;
        let environment = match std::env::var("PAYPAL_ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(Self::new(client_id, client_secret, environment))
    }

    pub(crate) fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("environment", &self.environment)
            .finish()
    }
}

/// Cache for the short-lived OAuth2 access token.
///
/// The cache starts empty and is populated lazily on the first request.
/// A token is replaced wholesale when it is absent or within the
/// caller's refresh buffer of its expiry.
///
/// # Thread Safety
///
/// `TokenCache` is shared across tasks behind an `Arc<RwLock>`. The
/// token grant itself runs outside the write lock, so concurrent
/// callers may refresh in parallel; that is tolerated - any valid token
/// works, and the last writer wins.
#[derive(Clone)]
pub struct TokenCache {
    credentials: Credentials,
    token_url: String,
    state: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    access_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl TokenCache {
    /// Create an empty cache for the given credentials.
    ///
    /// `base_url` is the API base the token endpoint hangs off of,
    /// normally `credentials.environment.api_base_url()`.
    pub fn new(credentials: Credentials, base_url: &str) -> Self {
        Self {
            credentials,
            token_url: format!("{}/v1/oauth2/token", base_url.trim_end_matches('/')),
            state: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a bearer token that is valid for at least `buffer` longer,
    /// performing a client-credentials grant if the cached one is
    /// absent or too close to expiry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] with the token endpoint's
    /// status and body when the grant is rejected, or [`Error::Http`]
    /// on transport failure. The cache is left untouched on failure.
    pub async fn bearer(&self, http: &reqwest::Client, buffer: Duration) -> Result<SecretString> {
        {
            let state = self.state.read().await;
            if let Some(token) = state.as_ref() {
                if Utc::now() + buffer < token.expires_at {
                    return Ok(token.access_token.clone());
                }
            }
        }

        self.refresh(http).await
    }

    /// Unconditionally perform a client-credentials grant and store the
    /// result, returning the new token.
    pub async fn refresh(&self, http: &reqwest::Client) -> Result<SecretString> {
        let response = self.fetch_token(http).await?;

        let access_token = SecretString::from(response.access_token);
        let expires_at = Utc::now() + Duration::seconds(response.expires_in);
        tracing::debug!(%expires_at, "access token refreshed");

        let mut state = self.state.write().await;
        *state = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at,
        });
        Ok(access_token)
    }

    /// Check whether a token is currently cached.
    pub async fn has_token(&self) -> bool {
        self.state.read().await.is_some()
    }

    /// Check if the cached token has expired. An empty cache counts as
    /// expired.
    pub async fn is_expired(&self) -> bool {
        match self.state.read().await.as_ref() {
            Some(token) => Utc::now() >= token.expires_at,
            None => true,
        }
    }

    /// Get the cached token's expiry, if one is cached.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.as_ref().map(|t| t.expires_at)
    }

    /// Drop the cached token; the next request will fetch a fresh one.
    pub async fn invalidate(&self) {
        *self.state.write().await = None;
    }

    async fn fetch_token(&self, http: &reqwest::Client) -> Result<TokenResponse> {
        tracing::debug!(environment = %self.credentials.environment, "requesting access token");

        let response = http
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(self.credentials.client_secret().expose_secret()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: Value = response.json().await.unwrap_or_default();
            return Err(Error::Authentication { status, body });
        }

        Ok(response.json().await?)
    }

    #[cfg(test)]
    async fn seed(&self, token: &str, expires_at: DateTime<Utc>) {
        *self.state.write().await = Some(CachedToken {
            access_token: SecretString::from(token.to_string()),
            expires_at,
        });
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache")
            .field("credentials", &self.credentials)
            .field("token_url", &self.token_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: String,
    expires_in: i64,
}
