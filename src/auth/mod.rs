//! Credentials and OAuth2 token lifecycle for the PayPal API.
//!
//! PayPal authenticates REST calls with short-lived bearer tokens
//! obtained through the OAuth2 client-credentials grant
//! (`POST /v1/oauth2/token` with HTTP Basic auth). [`TokenCache`]
//! performs that grant lazily and caches the token together with its
//! computed expiry; [`Credentials`] carries the application's client
//! id/secret and target environment.
//!
//! ```no_run
//! use paypal_rest::{Credentials, Environment};
//!
//! let credentials = Credentials::new(
//!     "client-id",
//!     "client-secret",
//!     Environment::Sandbox,
//! );
//! ```
//!
//! Most users never touch this module directly - constructing a
//! [`PayPalClient`](crate::PayPalClient) wires it up.

mod token;

pub use token::{Credentials, TokenCache};
