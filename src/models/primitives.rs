//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string
//! identifiers so the different PayPal resource ids cannot be mixed up
//! at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type! {
    /// A PayPal order id (e.g. `5O190127TN364715T`).
    ///
    /// # Example
    ///
    /// ```
    /// use paypal_rest::OrderId;
    ///
    /// let order = OrderId::new("5O190127TN364715T");
    /// assert_eq!(order.as_str(), "5O190127TN364715T");
    /// ```
    OrderId
}

id_type! {
    /// A PayPal authorization id, produced by authorizing an order.
    AuthorizationId
}

id_type! {
    /// A PayPal capture id, produced by capturing an order or an
    /// authorization.
    CaptureId
}

id_type! {
    /// A PayPal refund id.
    RefundId
}

id_type! {
    /// A webhook registration id.
    WebhookId
}

/// Environment configuration for the PayPal API.
///
/// Determines which API base URL to use - sandbox or live.
///
/// # Example
///
/// ```
/// use paypal_rest::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment for testing. No real money moves.
    #[default]
    Sandbox,
    /// Live environment - real transactions with real money.
    Live,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api-m.sandbox.paypal.com",
            Environment::Live => "https://api-m.paypal.com",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "live" | "production" => Ok(Environment::Live),
            other => Err(crate::Error::Config(format!(
                "unknown environment {other:?}, expected \"sandbox\" or \"live\""
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Live => write!(f, "live"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id() {
        let order = OrderId::new("5O190127TN364715T");
        assert_eq!(order.as_str(), "5O190127TN364715T");
        assert_eq!(order.to_string(), "5O190127TN364715T");
    }

    #[test]
    fn test_id_conversions() {
        let capture: CaptureId = "2GG279541U471931P".into();
        assert_eq!(capture.as_ref(), "2GG279541U471931P");

        let webhook = WebhookId::from("40Y916089Y8324740".to_string());
        assert_eq!(webhook.as_str(), "40Y916089Y8324740");
    }

    #[test]
    fn test_id_serde_transparent() {
        let refund = RefundId::new("1JU08902781691411");
        let json = serde_json::to_string(&refund).unwrap();
        assert_eq!(json, "\"1JU08902781691411\"");

        let back: RefundId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, refund);
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Live.api_base_url(),
            "https://api-m.paypal.com"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api-m.sandbox.paypal.com"
        );
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("Live".parse::<Environment>().unwrap(), Environment::Live);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_default_is_sandbox() {
        assert!(Environment::default().is_sandbox());
    }
}
