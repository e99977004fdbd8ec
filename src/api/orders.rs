//! Checkout orders service (`/v2/checkout/orders`).

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{Order, OrderId};
use crate::Result;

/// Service for order operations.
///
/// Order bodies are untyped JSON maps built by the caller (typically
/// with `serde_json::json!`) and pass through to the wire verbatim -
/// field correctness is between the caller and PayPal.
///
/// # Example
///
/// ```no_run
/// use paypal_rest::OrderId;
/// use serde_json::json;
///
/// # async fn example(client: paypal_rest::PayPalClient) -> paypal_rest::Result<()> {
/// let order = client.orders().create(json!({
///     "intent": "CAPTURE",
///     "purchase_units": [{
///         "reference_id": "default",
///         "amount": {"currency_code": "USD", "value": "100.00"}
///     }]
/// })).await?;
///
/// println!("approve at {:?}", order.approve_link());
///
/// // ... after payer approval:
/// let captured = client.orders().capture(&OrderId::new(&order.id), json!({})).await?;
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create an order.
    pub async fn create(&self, order: Value) -> Result<Order> {
        self.inner.post("/v2/checkout/orders", &order).await
    }

    /// Create an order with a `PayPal-Request-Id` idempotency key.
    ///
    /// Re-sending the same request id within PayPal's idempotency
    /// window returns the original order instead of creating a second
    /// one.
    pub async fn create_with_request_id(&self, order: Value, request_id: &str) -> Result<Order> {
        self.inner
            .post_with_request_id("/v2/checkout/orders", &order, request_id)
            .await
    }

    /// Show the details of an order.
    pub async fn show(&self, order_id: &OrderId) -> Result<Order> {
        self.inner
            .get(&format!("/v2/checkout/orders/{}", order_id))
            .await
    }

    /// Update an order with JSON Patch operations.
    ///
    /// `operations` is the patch array, e.g.
    /// `json!([{"op": "replace", "path": "/purchase_units/@reference_id=='default'/amount", "value": ...}])`.
    /// PayPal returns no body on success.
    pub async fn update(&self, order_id: &OrderId, operations: Value) -> Result<()> {
        let _: Value = self
            .inner
            .patch(&format!("/v2/checkout/orders/{}", order_id), &operations)
            .await?;
        Ok(())
    }

    /// Authorize payment for an approved order, placing funds on hold.
    ///
    /// The resulting authorization id is found under
    /// `purchase_units[].payments.authorizations[]`.
    pub async fn authorize(&self, order_id: &OrderId, body: Value) -> Result<Order> {
        self.inner
            .post(&format!("/v2/checkout/orders/{}/authorize", order_id), &body)
            .await
    }

    /// Capture payment for an approved order.
    ///
    /// Pass `json!({})` unless a payment source must be supplied.
    pub async fn capture(&self, order_id: &OrderId, body: Value) -> Result<Order> {
        self.inner
            .post(&format!("/v2/checkout/orders/{}/capture", order_id), &body)
            .await
    }

    /// Capture with a `PayPal-Request-Id` idempotency key.
    pub async fn capture_with_request_id(
        &self,
        order_id: &OrderId,
        body: Value,
        request_id: &str,
    ) -> Result<Order> {
        self.inner
            .post_with_request_id(
                &format!("/v2/checkout/orders/{}/capture", order_id),
                &body,
                request_id,
            )
            .await
    }
}
