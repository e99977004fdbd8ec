//! Models for authorized and captured payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Amount, Link};
use super::enums::{AuthorizationStatus, CaptureStatus};

/// An authorized payment: funds on hold, awaiting capture or void.
///
/// Beyond `id`, every field is optional - PayPal's representations vary
/// by flow and evolve over time, and this crate does not reject fields
/// it has never seen or insist on ones it has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    /// Authorization id
    pub id: String,
    /// Current status
    #[serde(default)]
    pub status: Option<AuthorizationStatus>,
    /// Authorized amount
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Merchant-provided invoice id
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Merchant-provided custom id
    #[serde(default)]
    pub custom_id: Option<String>,
    /// When the authorization expires if not captured
    #[serde(default)]
    pub expiration_time: Option<DateTime<Utc>>,
    /// Creation timestamp
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
    /// HATEOAS links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A captured payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capture {
    /// Capture id
    pub id: String,
    /// Current status
    #[serde(default)]
    pub status: Option<CaptureStatus>,
    /// Captured amount
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Whether this capture exhausts the authorization
    #[serde(default)]
    pub final_capture: Option<bool>,
    /// Merchant-provided invoice id
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Merchant-provided custom id
    #[serde(default)]
    pub custom_id: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
    /// HATEOAS links
    #[serde(default)]
    pub links: Vec<Link>,
}
