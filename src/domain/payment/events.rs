//! Payment domain events.
//!
//! Published after each step of the checkout handshake so that an order store,
//! analytics sink, or audit log can observe the flow without the handlers
//! knowing about it.

use serde::{Deserialize, Serialize};

use super::money::MinorUnits;
use super::signature::VerificationFailure;
use crate::domain::foundation::{OrderId, PaymentId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentEvent {
    OrderCreated {
        order_id: OrderId,
        amount: MinorUnits,
        currency: String,
        receipt: String,
        occurred_at: Timestamp,
    },
    PaymentVerified {
        order_id: OrderId,
        payment_id: PaymentId,
        occurred_at: Timestamp,
    },
    PaymentVerificationFailed {
        order_id: OrderId,
        payment_id: PaymentId,
        reason: VerificationFailure,
        occurred_at: Timestamp,
    },
}

impl PaymentEvent {
    /// Dotted event name for routing and log lines.
    pub fn event_type(&self) -> &'static str {
        match self {
            PaymentEvent::OrderCreated { .. } => "payment.order_created",
            PaymentEvent::PaymentVerified { .. } => "payment.verified",
            PaymentEvent::PaymentVerificationFailed { .. } => "payment.verification_failed",
        }
    }

    pub fn order_id(&self) -> &OrderId {
        match self {
            PaymentEvent::OrderCreated { order_id, .. }
            | PaymentEvent::PaymentVerified { order_id, .. }
            | PaymentEvent::PaymentVerificationFailed { order_id, .. } => order_id,
        }
    }

    pub fn occurred_at(&self) -> Timestamp {
        match self {
            PaymentEvent::OrderCreated { occurred_at, .. }
            | PaymentEvent::PaymentVerified { occurred_at, .. }
            | PaymentEvent::PaymentVerificationFailed { occurred_at, .. } => *occurred_at,
        }
    }
}
