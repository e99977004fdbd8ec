//! Models for the checkout orders resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Amount, Link, Payee, Payer};
use super::enums::{OrderIntent, OrderStatus};
use super::payment::{Authorization, Capture};
use super::refund::Refund;

/// An order, as returned by create/show/authorize/capture.
///
/// Request bodies for creating orders are deliberately untyped
/// ([`serde_json::Value`] maps built with `json!`) and pass through to
/// the wire unvalidated; this struct only shapes what comes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order id
    pub id: String,
    /// Current status
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Checkout intent
    #[serde(default)]
    pub intent: Option<OrderIntent>,
    /// Purchase units making up the order
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
    /// The approving customer, populated after approval
    #[serde(default)]
    pub payer: Option<Payer>,
    /// Payment source details, shape varies by funding instrument
    #[serde(default)]
    pub payment_source: Option<Value>,
    /// Creation timestamp
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
    /// HATEOAS links (`approve`, `capture`, ...)
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Order {
    /// Convenience accessor for the payer-approval link, present on
    /// freshly created orders.
    pub fn approve_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == "approve" || l.rel == "payer-action")
            .map(|l| l.href.as_str())
    }
}

/// One unit of goods or services within an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseUnit {
    /// Merchant-assigned id distinguishing units within the order
    #[serde(default)]
    pub reference_id: Option<String>,
    /// Unit amount
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Receiving merchant
    #[serde(default)]
    pub payee: Option<Payee>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Merchant-provided custom id
    #[serde(default)]
    pub custom_id: Option<String>,
    /// Merchant-provided invoice id
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Payments made against this unit, populated after
    /// authorize/capture
    #[serde(default)]
    pub payments: Option<PaymentCollection>,
}

/// The authorizations, captures, and refunds recorded against a
/// purchase unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCollection {
    /// Authorized payments
    #[serde(default)]
    pub authorizations: Vec<Authorization>,
    /// Captured payments
    #[serde(default)]
    pub captures: Vec<Capture>,
    /// Refunds
    #[serde(default)]
    pub refunds: Vec<Refund>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::CaptureStatus;

    fn created_order_body() -> Value {
        serde_json::json!({
            "id": "5O190127TN364715T",
            "status": "CREATED",
            "links": [
                {
                    "href": "https://api-m.sandbox.paypal.com/v2/checkout/orders/5O190127TN364715T",
                    "rel": "self",
                    "method": "GET"
                },
                {
                    "href": "https://www.sandbox.paypal.com/checkoutnow?token=5O190127TN364715T",
                    "rel": "approve",
                    "method": "GET"
                }
            ]
        })
    }

    #[test]
    fn test_created_order_decodes() {
        let order: Order = serde_json::from_value(created_order_body()).unwrap();
        assert_eq!(order.id, "5O190127TN364715T");
        assert_eq!(order.status, Some(OrderStatus::Created));
        assert_eq!(
            order.approve_link(),
            Some("https://www.sandbox.paypal.com/checkoutnow?token=5O190127TN364715T")
        );
    }

    #[test]
    fn test_captured_order_payments() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "5O190127TN364715T",
            "status": "COMPLETED",
            "purchase_units": [{
                "reference_id": "default",
                "payments": {
                    "captures": [{
                        "id": "3C679366HH908993F",
                        "status": "COMPLETED",
                        "amount": {"currency_code": "USD", "value": "100.00"},
                        "final_capture": true
                    }]
                }
            }]
        }))
        .unwrap();

        let captures = &order.purchase_units[0].payments.as_ref().unwrap().captures;
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].status, Some(CaptureStatus::Completed));
        assert_eq!(captures[0].final_capture, Some(true));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut body = created_order_body();
        body["processing_instruction"] = Value::String("ORDER_COMPLETE_ON_PAYMENT_APPROVAL".into());
        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.id, "5O190127TN364715T");
    }
}
