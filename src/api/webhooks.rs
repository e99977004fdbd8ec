//! Webhooks service (`/v1/notifications`).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{EventType, SignatureVerification, Webhook, WebhookEvent, WebhookId};
use crate::Result;

/// Service for webhook registrations and delivered event notifications.
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
///
/// # async fn example(client: paypal_rest::PayPalClient) -> paypal_rest::Result<()> {
/// let webhook = client.webhooks().create(json!({
///     "url": "https://example.com/paypal_webhooks",
///     "event_types": [
///         {"name": "PAYMENT.CAPTURE.COMPLETED"},
///         {"name": "PAYMENT.CAPTURE.REFUNDED"}
///     ]
/// })).await?;
/// println!("registered webhook {}", webhook.id);
/// # Ok(())
/// # }
/// ```
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing delivered webhook events.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EventsQuery {
    /// Number of events per page (PayPal caps this at 300)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Only events after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Only events before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Filter by transaction id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Filter by event type name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Register a webhook listener.
    pub async fn create(&self, webhook: Value) -> Result<Webhook> {
        self.inner.post("/v1/notifications/webhooks", &webhook).await
    }

    /// List the webhooks registered for the application.
    pub async fn list(&self) -> Result<Vec<Webhook>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            webhooks: Vec<Webhook>,
        }

        let response: Response = self.inner.get("/v1/notifications/webhooks").await?;
        Ok(response.webhooks)
    }

    /// Show details for a webhook.
    pub async fn get(&self, webhook_id: &WebhookId) -> Result<Webhook> {
        self.inner
            .get(&format!("/v1/notifications/webhooks/{}", webhook_id))
            .await
    }

    /// Update a webhook with JSON Patch operations; returns the updated
    /// webhook.
    pub async fn update(&self, webhook_id: &WebhookId, operations: Value) -> Result<Webhook> {
        self.inner
            .patch(
                &format!("/v1/notifications/webhooks/{}", webhook_id),
                &operations,
            )
            .await
    }

    /// Delete a webhook. PayPal returns no body on success.
    pub async fn delete(&self, webhook_id: &WebhookId) -> Result<()> {
        let _: Value = self
            .inner
            .delete(&format!("/v1/notifications/webhooks/{}", webhook_id))
            .await?;
        Ok(())
    }

    /// List the event types available for subscription.
    pub async fn event_types(&self) -> Result<Vec<EventType>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            event_types: Vec<EventType>,
        }

        let response: Response = self
            .inner
            .get("/v1/notifications/webhooks-event-types")
            .await?;
        Ok(response.event_types)
    }

    /// Verify a delivered webhook's transmission signature.
    ///
    /// The body carries the transmission headers, the webhook id, and
    /// the exact event payload as received; see PayPal's
    /// `verify-webhook-signature` documentation for the field set.
    pub async fn verify_signature(&self, body: Value) -> Result<SignatureVerification> {
        self.inner
            .post("/v1/notifications/verify-webhook-signature", &body)
            .await
    }

    /// List delivered event notifications.
    pub async fn list_events(&self, query: Option<EventsQuery>) -> Result<Vec<WebhookEvent>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            events: Vec<WebhookEvent>,
        }

        let path = "/v1/notifications/webhooks-events";
        let response: Response = match query {
            Some(q) => self.inner.get_with_query(path, &q).await?,
            None => self.inner.get(path).await?,
        };
        Ok(response.events)
    }

    /// Show details for a delivered event notification.
    pub async fn show_event(&self, event_id: &str) -> Result<WebhookEvent> {
        self.inner
            .get(&format!("/v1/notifications/webhooks-events/{}", event_id))
            .await
    }

    /// Resend a delivered event notification to some or all of its
    /// webhooks (`json!({})` resends to all).
    pub async fn resend_event(&self, event_id: &str, body: Value) -> Result<WebhookEvent> {
        self.inner
            .post(
                &format!("/v1/notifications/webhooks-events/{}/resend", event_id),
                &body,
            )
            .await
    }
}
