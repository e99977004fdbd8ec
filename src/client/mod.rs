//! HTTP client and request executor for the PayPal API.
//!
//! This module provides the main entry point [`PayPalClient`] plus its
//! [`ClientConfig`]. All resource services funnel their calls through
//! the executor here, which attaches the bearer token, serializes JSON
//! bodies, and normalizes responses into [`crate::Result`].
//!
//! # Example
//!
//! ```no_run
//! use paypal_rest::{PayPalClient, Credentials, Environment};
//!
//! # async fn example() -> paypal_rest::Result<()> {
//! let client = PayPalClient::new(Credentials::new(
//!     "client-id",
//!     "client-secret",
//!     Environment::Sandbox,
//! ))?;
//!
//! let webhooks = client.webhooks().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::PayPalClient;
pub(crate) use http::ClientInner;
