//! PaymentEventPublisher port - Interface for publishing payment events.
//!
//! This is the integration point for anything that wants to observe the
//! checkout handshake (an order store marking orders paid, an audit log).
//! Handlers do not know which sink is behind it.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::payment::PaymentEvent;

/// Port for publishing payment events.
///
/// A publish failure is reported to the caller; the checkout handlers log it
/// and do not change their response.
#[async_trait]
pub trait PaymentEventPublisher: Send + Sync {
    async fn publish(&self, event: PaymentEvent) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn PaymentEventPublisher) {}
}
