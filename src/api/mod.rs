//! API service modules for PayPal endpoints.
//!
//! Each service is a fixed mapping of endpoints to methods, delegating
//! to the shared request executor; no validation of caller-supplied
//! bodies happens in this layer.

mod orders;
mod payments;
mod refunds;
mod webhooks;

pub use orders::OrdersService;
pub use payments::PaymentsService;
pub use refunds::RefundsService;
pub use webhooks::{EventsQuery, WebhooksService};
