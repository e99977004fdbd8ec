//! Enumeration types for the PayPal API.
//!
//! Status and intent enums used throughout the response models. PayPal
//! adds values over time; every enum folds unrecognized values into an
//! `Unknown` variant instead of failing to deserialize.

use serde::{Deserialize, Serialize};

/// The intent of an order: whether approval captures immediately or
/// only authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    /// Capture the payment immediately after the payer approves.
    #[default]
    Capture,
    /// Authorize the payment for later capture.
    Authorize,
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created, awaiting payer action
    Created,
    /// Order saved, funding pending
    Saved,
    /// Payer approved the order
    Approved,
    /// All purchase units were voided
    Voided,
    /// Payment was authorized or captured
    Completed,
    /// Additional payer action required (e.g. 3DS)
    PayerActionRequired,
    /// Unrecognized status value
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` once the order reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Voided)
    }
}

/// Status of an authorized payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationStatus {
    /// Funds are on hold
    Created,
    /// Captured, in full or in part
    Captured,
    /// Authorization was voided
    Voided,
    /// Authorization expired without capture
    Expired,
    /// Partially captured
    PartiallyCaptured,
    /// Held pending review
    Pending,
    /// Unrecognized status value
    #[serde(other)]
    Unknown,
}

/// Status of a captured payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureStatus {
    /// Funds captured
    Completed,
    /// Capture declined
    Declined,
    /// Partially refunded
    PartiallyRefunded,
    /// Held pending review
    Pending,
    /// Fully refunded
    Refunded,
    /// Capture failed
    Failed,
    /// Unrecognized status value
    #[serde(other)]
    Unknown,
}

/// Status of a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    /// Refund was cancelled
    Cancelled,
    /// Refund failed
    Failed,
    /// Refund pending, e.g. awaiting the payer's bank
    Pending,
    /// Refund completed
    Completed,
    /// Unrecognized status value
    #[serde(other)]
    Unknown,
}

/// Result of a webhook signature verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// The signature is valid
    Success,
    /// The signature is invalid
    Failure,
    /// Unrecognized status value
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    /// Returns `true` if the webhook signature verified successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        let status: OrderStatus = serde_json::from_str("\"PAYER_ACTION_REQUIRED\"").unwrap();
        assert_eq!(status, OrderStatus::PayerActionRequired);
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }

    #[test]
    fn test_unknown_values_tolerated() {
        let status: CaptureStatus = serde_json::from_str("\"SOME_FUTURE_STATUS\"").unwrap();
        assert_eq!(status, CaptureStatus::Unknown);

        let status: RefundStatus = serde_json::from_str("\"NOT_A_STATUS\"").unwrap();
        assert_eq!(status, RefundStatus::Unknown);
    }

    #[test]
    fn test_terminal_order_status() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Voided.is_terminal());
        assert!(!OrderStatus::Created.is_terminal());
    }

    #[test]
    fn test_verification_status() {
        let status: VerificationStatus = serde_json::from_str("\"SUCCESS\"").unwrap();
        assert!(status.is_success());
        let status: VerificationStatus = serde_json::from_str("\"FAILURE\"").unwrap();
        assert!(!status.is_success());
    }
}
