//! Shared building blocks that appear across resource models.

use serde::{Deserialize, Serialize};

/// A monetary amount.
///
/// PayPal transmits values as decimal strings (e.g. `"100.00"`); they
/// are kept as strings rather than parsed, so no precision is lost and
/// no rounding policy is imposed by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Three-letter ISO 4217 currency code
    pub currency_code: String,
    /// Decimal value as a string, e.g. `"100.00"`
    pub value: String,
}

impl Amount {
    /// Create an amount from a currency code and a decimal string value.
    pub fn new(currency_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            value: value.into(),
        }
    }
}

/// A HATEOAS link returned on most PayPal resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Link relation (e.g. `self`, `approve`, `capture`)
    pub rel: String,
    /// HTTP method to use with the link
    #[serde(default)]
    pub method: Option<String>,
}

/// The merchant that receives the funds for a purchase unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    /// Merchant email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// PayPal merchant id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

/// The customer who approves and funds the payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Payer's PayPal account id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
    /// Payer email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}
