//! Models for refunds of captured payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Amount, Link};
use super::enums::RefundStatus;

/// A refund against a captured payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    /// Refund id
    pub id: String,
    /// Current status
    #[serde(default)]
    pub status: Option<RefundStatus>,
    /// Refunded amount
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Merchant-provided invoice id
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Note shown to the payer
    #[serde(default)]
    pub note_to_payer: Option<String>,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_decodes() {
        let refund: Refund = serde_json::from_value(serde_json::json!({
            "id": "1JU08902781691411",
            "status": "COMPLETED",
            "amount": {"currency_code": "USD", "value": "10.99"},
            "note_to_payer": "Defective product",
            "links": [
                {"href": "https://api-m.paypal.com/v2/payments/refunds/1JU08902781691411", "rel": "self", "method": "GET"}
            ]
        }))
        .unwrap();

        assert_eq!(refund.status, Some(RefundStatus::Completed));
        assert_eq!(refund.note_to_payer.as_deref(), Some("Defective product"));
        assert_eq!(refund.links.len(), 1);
    }
}
