//! VerifyPaymentHandler - Command handler for checking a checkout result.

use std::sync::Arc;

use crate::domain::foundation::{OrderId, PaymentId, Timestamp};
use crate::domain::payment::{
    CheckoutError, CheckoutSignature, CheckoutSignatureVerifier, PaymentEvent,
    VerificationOutcome, VerificationRequest,
};
use crate::ports::PaymentEventPublisher;

/// Message returned when any part of the checkout result is absent.
pub const MISSING_VERIFICATION_PARAMETERS: &str = "Missing payment verification parameters.";

/// Checkout result as the browser relays it.
#[derive(Debug, Clone, Default)]
pub struct VerifyPaymentCommand {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
}

/// Result of a verification attempt. A rejected signature is a normal
/// outcome here, not an error.
#[derive(Debug, Clone)]
pub struct VerifyPaymentResult {
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub outcome: VerificationOutcome,
}

/// Handler for checkout signature verification.
pub struct VerifyPaymentHandler {
    verifier: Arc<CheckoutSignatureVerifier>,
    event_publisher: Arc<dyn PaymentEventPublisher>,
}

impl VerifyPaymentHandler {
    pub fn new(
        verifier: Arc<CheckoutSignatureVerifier>,
        event_publisher: Arc<dyn PaymentEventPublisher>,
    ) -> Self {
        Self {
            verifier,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifyPaymentCommand,
    ) -> Result<VerifyPaymentResult, CheckoutError> {
        // 1. All three parts are required; nothing is computed otherwise
        let request = Self::parse_request(cmd)?;

        // 2. Recompute and compare
        let outcome = self.verifier.verify(&request);

        // 3. Publish
        let event = match outcome.failure {
            None => PaymentEvent::PaymentVerified {
                order_id: request.order_id.clone(),
                payment_id: request.payment_id.clone(),
                occurred_at: Timestamp::now(),
            },
            Some(reason) => PaymentEvent::PaymentVerificationFailed {
                order_id: request.order_id.clone(),
                payment_id: request.payment_id.clone(),
                reason,
                occurred_at: Timestamp::now(),
            },
        };
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!(
                order_id = %request.order_id,
                error = %e,
                "Failed to publish verification event"
            );
        }

        Ok(VerifyPaymentResult {
            order_id: request.order_id,
            payment_id: request.payment_id,
            outcome,
        })
    }

    fn parse_request(cmd: VerifyPaymentCommand) -> Result<VerificationRequest, CheckoutError> {
        let missing = |field: &str| CheckoutError::validation(field, MISSING_VERIFICATION_PARAMETERS);

        let order_id = cmd
            .order_id
            .and_then(|id| OrderId::new(id).ok())
            .ok_or_else(|| missing("order_id"))?;
        let payment_id = cmd
            .payment_id
            .and_then(|id| PaymentId::new(id).ok())
            .ok_or_else(|| missing("payment_id"))?;
        let signature = cmd
            .signature
            .and_then(|s| CheckoutSignature::new(s).ok())
            .ok_or_else(|| missing("signature"))?;

        Ok(VerificationRequest {
            order_id,
            payment_id,
            signature,
        })
    }
}
