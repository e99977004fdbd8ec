//! Error types for the PayPal API client.
//!
//! Every failure mode the crate can hit is folded into the [`Error`]
//! enum: configuration problems, OAuth token endpoint failures,
//! transport errors, non-2xx API responses, and undecodable bodies.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for PayPal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all PayPal API operations.
///
/// Expected HTTP-layer failures never panic or escape as anything other
/// than this enum; callers pattern-match on the variants or use the
/// `is_*` predicates.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure (DNS, connection, timeout) or other reqwest error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-2xx response
    #[error("API error: status={status}, name={name:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// PayPal error name (e.g. `RESOURCE_NOT_FOUND`)
        name: Option<String>,
        /// Human-readable error message
        message: String,
        /// PayPal debug id for support correlation
        debug_id: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// The OAuth token endpoint rejected the credential grant
    #[error("Authentication failed: status={status}, body={body}")]
    Authentication {
        /// HTTP status code from the token endpoint
        status: u16,
        /// Raw token endpoint response body
        body: Value,
    },

    /// A 2xx response carried a body that is not valid JSON
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// HTTP status code of the response
        status: u16,
        /// The raw, undecodable body
        body: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if this is a transport-level failure (DNS,
    /// connection, timeout) rather than an API-level one.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if this is an authentication-related error,
    /// either from the token endpoint or a 401 on a resource call.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. }) || self.is_unauthorized()
    }

    /// Returns `true` for a 401 response from a resource endpoint.
    ///
    /// The executor does not retry on 401; callers that want a
    /// refresh-and-retry can match on this and re-issue the call after
    /// [`PayPalClient::refresh_token`](crate::PayPalClient::refresh_token).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Returns `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Config(_) | Error::InvalidInput(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a non-2xx response, preserving PayPal's
    /// structured payload (`name`, `message`, `debug_id`) when present.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let name = body
            .get("name")
            .and_then(|n| n.as_str())
            .map(String::from);

        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        let debug_id = body
            .get("debug_id")
            .and_then(|d| d.as_str())
            .map(String::from);

        Error::Api {
            status,
            name,
            message,
            debug_id,
            body,
        }
    }
}
