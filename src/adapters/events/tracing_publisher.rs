//! Publisher that records payment events as structured log lines.
//!
//! The default sink when no order store is wired in. Successful
//! verifications log at `info`, rejected ones at `warn`.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::payment::PaymentEvent;
use crate::ports::PaymentEventPublisher;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentEventPublisher for TracingEventPublisher {
    async fn publish(&self, event: PaymentEvent) -> Result<(), DomainError> {
        match &event {
            PaymentEvent::OrderCreated {
                order_id,
                amount,
                currency,
                receipt,
                ..
            } => {
                tracing::info!(
                    event_type = event.event_type(),
                    order_id = %order_id,
                    amount = amount.value(),
                    currency = %currency,
                    receipt = %receipt,
                    "Order created"
                );
            }
            PaymentEvent::PaymentVerified {
                order_id,
                payment_id,
                ..
            } => {
                tracing::info!(
                    event_type = event.event_type(),
                    order_id = %order_id,
                    payment_id = %payment_id,
                    "Payment successful"
                );
            }
            PaymentEvent::PaymentVerificationFailed {
                order_id,
                payment_id,
                reason,
                ..
            } => {
                tracing::warn!(
                    event_type = event.event_type(),
                    order_id = %order_id,
                    payment_id = %payment_id,
                    reason = %reason,
                    "Payment verification failed"
                );
            }
        }
        Ok(())
    }
}
