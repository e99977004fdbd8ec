//! HTTP client implementation for the PayPal REST API.

use std::sync::Arc;

use chrono::Duration;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::api::{OrdersService, PaymentsService, RefundsService, WebhooksService};
use crate::auth::{Credentials, TokenCache};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the PayPal REST API.
///
/// The client owns the credentials, the cached access token, and the
/// underlying HTTP connection pool; resource services borrow it through
/// cheap accessor methods. Cloning the client clones a handle, not the
/// state.
///
/// A 401 from a resource endpoint is returned as an error, not retried:
/// callers that want the refresh-and-retry pattern call
/// [`refresh_token`](Self::refresh_token) and re-issue the request.
///
/// # Example
///
/// ```no_run
/// use paypal_rest::{PayPalClient, Credentials, Environment, OrderId};
/// use serde_json::json;
///
/// # async fn example() -> paypal_rest::Result<()> {
/// let client = PayPalClient::new(Credentials::new(
///     "client-id",
///     "client-secret",
///     Environment::Sandbox,
/// ))?;
///
/// let order = client.orders().create(json!({
///     "intent": "CAPTURE",
///     "purchase_units": [{
///         "amount": {"currency_code": "USD", "value": "100.00"}
///     }]
/// })).await?;
///
/// let captured = client.orders().capture(&OrderId::new(&order.id), json!({})).await?;
/// # Ok(())
/// # }
/// ```
pub struct PayPalClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) tokens: TokenCache,
    pub(crate) config: ClientConfig,
    pub(crate) environment: Environment,
    pub(crate) base_url: String,
}

impl PayPalClient {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from `PAYPAL_CLIENT_ID` / `PAYPAL_CLIENT_SECRET`
    /// / `PAYPAL_ENVIRONMENT`.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| credentials.environment.api_base_url().to_string());
        Url::parse(&base_url)?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let environment = credentials.environment;
        let tokens = TokenCache::new(credentials, &base_url);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                tokens,
                config,
                environment,
                base_url,
            }),
        })
    }

    /// Get the checkout orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the payments service (authorizations and captures).
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.inner.clone())
    }

    /// Get the refunds service.
    pub fn refunds(&self) -> RefundsService {
        RefundsService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Manually refresh the cached access token.
    pub async fn refresh_token(&self) -> Result<()> {
        self.inner.tokens.refresh(&self.inner.http).await.map(|_| ())
    }

    /// Get the environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.inner.environment
    }

    /// Get a reference to the token cache.
    pub fn token_cache(&self) -> &TokenCache {
        &self.inner.tokens
    }

    /// Issue a raw authenticated request against a relative API path.
    ///
    /// Escape hatch for endpoints without a dedicated wrapper. The body
    /// passes through verbatim; the response is normalized exactly like
    /// every wrapper call (empty 2xx body becomes an empty JSON object).
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let headers = self.inner.bearer_headers().await?;
        let mut request = self
            .inner
            .http
            .request(method, self.inner.url(path))
            .headers(headers);
        if let Some(body) = &body {
            request = request.json(body);
        }
        let response = request.send().await?;
        self.inner.handle_response(response).await
    }
}

impl ClientInner {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build request headers, obtaining (and if needed refreshing) the
    /// bearer token first.
    pub(crate) async fn bearer_headers(&self) -> Result<HeaderMap> {
        let buffer = Duration::seconds(self.config.refresh_buffer_secs);
        let token = self.tokens.bearer(&self.http, buffer).await?;

        let mut headers = HeaderMap::new();
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self.http.get(self.url(path)).headers(headers).send().await?;

        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self
            .http
            .get(self.url(path))
            .headers(headers)
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self
            .http
            .post(self.url(path))
            .headers(headers)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body and a `PayPal-Request-Id`
    /// idempotency header.
    pub(crate) async fn post_with_request_id<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        request_id: &str,
    ) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self
            .http
            .post(self.url(path))
            .headers(headers)
            .header("PayPal-Request-Id", request_id)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self.http.post(self.url(path)).headers(headers).send().await?;

        self.handle_response(response).await
    }

    /// Make a PATCH request with a JSON body.
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self
            .http
            .patch(self.url(path))
            .headers(headers)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let headers = self.bearer_headers().await?;

        let response = self
            .http
            .delete(self.url(path))
            .headers(headers)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Normalize an API response.
    ///
    /// 2xx with an empty body decodes as an empty JSON object; 2xx with
    /// a malformed body is a [`Error::Decode`] carrying the raw text.
    /// Every non-2xx status, 401 included, becomes [`Error::Api`] with
    /// PayPal's structured payload preserved - no retry is performed
    /// here.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let value: Value = if bytes.is_empty() {
                Value::Object(serde_json::Map::new())
            } else {
                serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                    source,
                })?
            };
            Ok(serde_json::from_value(value)?)
        } else {
            let body: Value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                })
            };
            tracing::debug!(status = status.as_u16(), "API returned error response");
            Err(Error::from_api_response(status.as_u16(), body))
        }
    }
}

impl Clone for PayPalClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for PayPalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayPalClient")
            .field("environment", &self.inner.environment)
            .field("base_url", &self.inner.base_url)
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("id", "secret", Environment::Sandbox)
    }

    #[test]
    fn test_base_url_follows_environment() {
        let client = PayPalClient::new(credentials()).unwrap();
        assert_eq!(client.inner.base_url, "https://api-m.sandbox.paypal.com");
        assert_eq!(client.environment(), Environment::Sandbox);
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:9000/");
        let client = PayPalClient::with_config(credentials(), config).unwrap();
        assert_eq!(client.inner.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::default().with_base_url("not a url");
        assert!(PayPalClient::with_config(credentials(), config).is_err());
    }

    #[test]
    fn test_debug_omits_secrets() {
        let client = PayPalClient::new(credentials()).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("secret"));
    }
}
