//! Mock payment gateway for testing.
//!
//! Mints deterministic order ids (`order_mock0001`, `order_mock0002`, ...)
//! and echoes the draft's amount, currency and receipt back. Supports:
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::OrderId;
use crate::domain::payment::{Order, OrderDraft};
use crate::ports::{GatewayError, PaymentGateway};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.set_error(GatewayError::network("connection refused"));
/// let result = mock.create_order(&draft).await;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Error returned by every call until cleared.
    error: Option<GatewayError>,

    /// Drafts received, in order.
    call_log: Vec<OrderDraft>,

    /// Orders minted so far.
    minted: u32,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with the given error.
    pub fn failing(error: GatewayError) -> Self {
        let mock = Self::new();
        mock.set_error(error);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().error = Some(error);
    }

    pub fn clear_error(&self) {
        self.inner.lock().unwrap().error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Drafts passed to `create_order`, oldest first.
    pub fn calls(&self) -> Vec<OrderDraft> {
        self.inner.lock().unwrap().call_log.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    pub fn last_call(&self) -> Option<OrderDraft> {
        self.inner.lock().unwrap().call_log.last().cloned()
    }
}

impl Clone for MockPaymentGateway {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(draft.clone());

        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        state.minted += 1;
        let id = OrderId::new(format!("order_mock{:04}", state.minted))
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;

        Ok(Order {
            id,
            amount: draft.amount,
            currency: draft.currency.as_str().to_string(),
            receipt: Some(draft.receipt.as_str().to_string()),
            status: "created".to_string(),
        })
    }
}
