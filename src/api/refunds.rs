//! Refunds service (`/v2/payments/captures/{id}/refund`,
//! `/v2/payments/refunds`).

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{CaptureId, Refund, RefundId};
use crate::Result;

/// Service for refunding captured payments.
///
/// # Example
///
/// ```no_run
/// use paypal_rest::CaptureId;
/// use serde_json::json;
///
/// # async fn example(client: paypal_rest::PayPalClient) -> paypal_rest::Result<()> {
/// // Partial refund; json!({}) refunds the full capture
/// let refund = client.refunds()
///     .create(&CaptureId::new("2GG279541U471931P"), json!({
///         "amount": {"currency_code": "USD", "value": "10.99"},
///         "note_to_payer": "Defective product"
///     }))
///     .await?;
/// println!("refund {}: {:?}", refund.id, refund.status);
/// # Ok(())
/// # }
/// ```
pub struct RefundsService {
    inner: Arc<ClientInner>,
}

impl RefundsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Refund a captured payment. Pass `json!({})` for a full refund.
    pub async fn create(&self, capture_id: &CaptureId, body: Value) -> Result<Refund> {
        self.inner
            .post(&format!("/v2/payments/captures/{}/refund", capture_id), &body)
            .await
    }

    /// Refund with a `PayPal-Request-Id` idempotency key.
    pub async fn create_with_request_id(
        &self,
        capture_id: &CaptureId,
        body: Value,
        request_id: &str,
    ) -> Result<Refund> {
        self.inner
            .post_with_request_id(
                &format!("/v2/payments/captures/{}/refund", capture_id),
                &body,
                request_id,
            )
            .await
    }

    /// Show details for a refund.
    pub async fn show(&self, refund_id: &RefundId) -> Result<Refund> {
        self.inner
            .get(&format!("/v2/payments/refunds/{}", refund_id))
            .await
    }
}
