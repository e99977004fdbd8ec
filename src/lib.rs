//! # paypal-rest
//!
//! An async Rust client for the PayPal REST API.
//!
//! This crate wraps PayPal's checkout and payments surface - orders,
//! authorizations, captures, refunds, and webhooks - behind a typed
//! client that handles OAuth2 token acquisition, request signing, and
//! response normalization.
//!
//! ## Features
//!
//! - **Token lifecycle**: client-credentials grant, cached until expiry,
//!   refreshed transparently before requests
//! - **Orders**: create, show, update, authorize, and capture checkout
//!   orders
//! - **Payments**: manage authorizations and captures after checkout
//! - **Refunds**: full and partial refunds of captured payments
//! - **Webhooks**: register listeners, verify signatures, replay events
//! - **Uniform errors**: every expected HTTP-layer failure surfaces as
//!   [`Error`], never a panic
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypal_rest::{PayPalClient, Credentials, Environment, OrderId};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> paypal_rest::Result<()> {
//!     let client = PayPalClient::new(Credentials::new(
//!         "client-id",
//!         "client-secret",
//!         Environment::Sandbox,
//!     ))?;
//!
//!     // Create an order
//!     let order = client.orders().create(json!({
//!         "intent": "CAPTURE",
//!         "purchase_units": [{
//!             "amount": {"currency_code": "USD", "value": "100.00"}
//!         }]
//!     })).await?;
//!
//!     println!("Send the payer to {:?}", order.approve_link());
//!
//!     // ... after the payer approves:
//!     let captured = client.orders()
//!         .capture(&OrderId::new(&order.id), json!({}))
//!         .await?;
//!     println!("Order status: {:?}", captured.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Resource calls return [`Result`]; PayPal's structured error payload
//! is preserved on the [`Error::Api`] variant:
//!
//! ```rust,no_run
//! use paypal_rest::{Error, OrderId};
//!
//! # async fn example(client: paypal_rest::PayPalClient) {
//! match client.orders().show(&OrderId::new("5O190127TN364715T")).await {
//!     Ok(order) => println!("{:?}", order.status),
//!     Err(Error::Api { status, name, .. }) => {
//!         eprintln!("PayPal rejected the call: {} {:?}", status, name)
//!     }
//!     Err(other) => eprintln!("transport or decode failure: {other}"),
//! }
//! # }
//! ```
//!
//! A 401 is returned like any other API error - the client does not
//! retry on its own. Call [`PayPalClient::refresh_token`] and re-issue
//! the request if you want that behavior.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, TokenCache};
pub use client::{ClientConfig, PayPalClient};
pub use error::{Error, Result};
pub use models::{
    AuthorizationId, CaptureId, Environment, OrderId, RefundId, WebhookId,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use paypal_rest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        EventsQuery, OrdersService, PaymentsService, RefundsService, WebhooksService,
    };
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, PayPalClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AuthorizationId, CaptureId, Environment, OrderId, RefundId, WebhookId,
        // Enums
        AuthorizationStatus, CaptureStatus, OrderIntent, OrderStatus, RefundStatus,
        VerificationStatus,
        // Common pieces
        Amount, Link, Payee, Payer,
        // Resource models
        Authorization, Capture, EventType, Order, PaymentCollection, PurchaseUnit,
        Refund, SignatureVerification, Webhook, WebhookEvent,
    };
}
