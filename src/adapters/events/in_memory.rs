//! In-memory payment event publisher for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::payment::PaymentEvent;
use crate::ports::PaymentEventPublisher;

/// Captures published events for assertions.
///
/// # Example
///
/// ```ignore
/// let events = Arc::new(InMemoryEventPublisher::new());
/// handler.handle(cmd).await?;
/// assert!(events.has_event("payment.verified"));
/// ```
pub struct InMemoryEventPublisher {
    published: RwLock<Vec<PaymentEvent>>,
    fail_publish: bool,
}

impl InMemoryEventPublisher {
    /// Creates a new empty publisher.
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_publish: false,
        }
    }

    /// Creates a publisher that rejects every event.
    pub fn failing() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_publish: true,
        }
    }

    // === Test Helpers ===

    /// Returns all published events.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn published_events(&self) -> Vec<PaymentEvent> {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<PaymentEvent> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .iter()
            .any(|e| e.event_type() == event_type)
    }
}

impl Default for InMemoryEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentEventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: PaymentEvent) -> Result<(), DomainError> {
        if self.fail_publish {
            return Err(DomainError::new(
                ErrorCode::EventPublishFailed,
                "Simulated publish failure",
            )
            .with_detail("event_type", event.event_type())
            .with_detail("order_id", event.order_id().as_str()));
        }

        self.published
            .write()
            .expect("InMemoryEventPublisher: published write lock poisoned")
            .push(event);
        Ok(())
    }
}
