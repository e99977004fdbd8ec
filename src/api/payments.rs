//! Payments service: authorized and captured payments
//! (`/v2/payments`).

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{Authorization, AuthorizationId, Capture, CaptureId};
use crate::Result;

/// Service for working with authorizations and captures after checkout.
///
/// # Example
///
/// ```no_run
/// use paypal_rest::AuthorizationId;
/// use serde_json::json;
///
/// # async fn example(client: paypal_rest::PayPalClient) -> paypal_rest::Result<()> {
/// let auth_id = AuthorizationId::new("0VF52814937998046");
///
/// // Capture the full authorized amount
/// let capture = client.payments()
///     .capture_authorization(&auth_id, json!({"final_capture": true}))
///     .await?;
/// println!("captured: {:?}", capture.status);
/// # Ok(())
/// # }
/// ```
pub struct PaymentsService {
    inner: Arc<ClientInner>,
}

impl PaymentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Show details for an authorized payment.
    pub async fn show_authorization(&self, id: &AuthorizationId) -> Result<Authorization> {
        self.inner
            .get(&format!("/v2/payments/authorizations/{}", id))
            .await
    }

    /// Capture an authorized payment, in full or in part.
    ///
    /// Pass `json!({})` to capture the full authorized amount.
    pub async fn capture_authorization(
        &self,
        id: &AuthorizationId,
        body: Value,
    ) -> Result<Capture> {
        self.inner
            .post(&format!("/v2/payments/authorizations/{}/capture", id), &body)
            .await
    }

    /// Reauthorize an authorized payment after the honor period,
    /// refreshing the hold on funds.
    pub async fn reauthorize(&self, id: &AuthorizationId, body: Value) -> Result<Authorization> {
        self.inner
            .post(
                &format!("/v2/payments/authorizations/{}/reauthorize", id),
                &body,
            )
            .await
    }

    /// Void an authorized payment, releasing the hold. PayPal returns
    /// no body on success.
    pub async fn void(&self, id: &AuthorizationId) -> Result<()> {
        let _: Value = self
            .inner
            .post_empty(&format!("/v2/payments/authorizations/{}/void", id))
            .await?;
        Ok(())
    }

    /// Show details for a captured payment.
    pub async fn show_capture(&self, id: &CaptureId) -> Result<Capture> {
        self.inner
            .get(&format!("/v2/payments/captures/{}", id))
            .await
    }
}
