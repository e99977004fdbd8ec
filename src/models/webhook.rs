//! Models for webhook registrations and event notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Link;
use super::enums::VerificationStatus;

/// A registered webhook: a listener URL plus the event types delivered
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook id
    pub id: String,
    /// Listener URL
    pub url: String,
    /// Event types this webhook subscribes to
    #[serde(default)]
    pub event_types: Vec<EventType>,
    /// HATEOAS links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A webhook event type, e.g. `PAYMENT.CAPTURE.COMPLETED`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventType {
    /// Event type name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the event type is enabled or deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl EventType {
    /// Create an event type by name, for webhook create/update bodies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: None,
        }
    }
}

/// A delivered webhook event notification.
///
/// The `resource` payload varies by `resource_type` (order, capture,
/// refund, ...) and is surfaced as raw JSON for the caller to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event id
    pub id: String,
    /// Event type name, e.g. `PAYMENT.CAPTURE.COMPLETED`
    #[serde(default)]
    pub event_type: Option<String>,
    /// Type of the resource in the payload
    #[serde(default)]
    pub resource_type: Option<String>,
    /// The resource that triggered the event
    #[serde(default)]
    pub resource: Option<Value>,
    /// Human-readable summary
    #[serde(default)]
    pub summary: Option<String>,
    /// When the event occurred
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// HATEOAS links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Response of the webhook signature verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureVerification {
    /// Whether the signature checked out
    pub verification_status: VerificationStatus,
}
