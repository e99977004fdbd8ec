//! Data models for the PayPal API.
//!
//! Response models are typed but tolerant: `id` is required, everything
//! else is optional, and unknown enum values deserialize to `Unknown`.
//! Models are organized by domain:
//!
//! - [`primitives`] - Core types like [`OrderId`], [`Environment`], etc.
//! - [`enums`] - Status and intent enumerations
//! - [`common`] - Shared pieces: [`Amount`], [`Link`], [`Payer`], [`Payee`]
//! - [`order`] - Checkout order models
//! - [`payment`] - Authorization and capture models
//! - [`refund`] - Refund models
//! - [`webhook`] - Webhook registration and event models

pub mod common;
pub mod enums;
pub mod order;
pub mod payment;
pub mod primitives;
pub mod refund;
pub mod webhook;

// Re-export commonly used types
pub use common::*;
pub use enums::*;
pub use order::*;
pub use payment::*;
pub use primitives::*;
pub use refund::*;
pub use webhook::*;
