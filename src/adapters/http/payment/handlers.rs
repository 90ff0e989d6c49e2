//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to the payment command handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::payment::{CreateOrderHandler, VerifyPaymentHandler};
use crate::domain::payment::{CheckoutError, CheckoutSignatureVerifier};
use crate::ports::{PaymentEventPublisher, PaymentGateway};

use super::dto::{
    CheckoutConfigResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse,
    VerifyPaymentRequest, VerifyPaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; holds only Arc-wrapped, immutable collaborators.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub verifier: Arc<CheckoutSignatureVerifier>,
    pub event_publisher: Arc<dyn PaymentEventPublisher>,
    /// Public key id handed to the checkout widget.
    pub key_id: String,
    pub default_currency: String,
}

impl PaymentAppState {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        verifier: Arc<CheckoutSignatureVerifier>,
        event_publisher: Arc<dyn PaymentEventPublisher>,
        key_id: impl Into<String>,
        default_currency: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            verifier,
            event_publisher,
            key_id: key_id.into(),
            default_currency: default_currency.into(),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.gateway.clone(), self.event_publisher.clone())
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(self.verifier.clone(), self.event_publisher.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payment/create-order - Mint a gateway order
pub async fn create_order(
    State(state): State<PaymentAppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let Json(request) = payload?;
    let cmd = request.into_command()?;

    let result = state.create_order_handler().handle(cmd).await?;

    tracing::info!(
        order_id = %result.order.id,
        amount = result.order.amount.value(),
        currency = %result.order.currency,
        "Order created"
    );

    Ok(Json(CreateOrderResponse::from(result)))
}

/// POST /api/payment/verify-payment - Verify a checkout signature
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let Json(request) = payload?;

    let result = state.verify_payment_handler().handle(request.into()).await?;

    match result.outcome.failure {
        None => Ok(Json(VerifyPaymentResponse::verified())),
        Some(reason) => Err(CheckoutError::verification_failed(reason).into()),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/payment/checkout-config - Public settings for the checkout widget
pub async fn checkout_config(State(state): State<PaymentAppState>) -> impl IntoResponse {
    Json(CheckoutConfigResponse {
        key_id: state.key_id.clone(),
        currency: state.default_currency.clone(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for converting checkout errors to HTTP responses.
#[derive(Debug)]
pub struct PaymentApiError(CheckoutError);

impl From<CheckoutError> for PaymentApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for PaymentApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CheckoutError::validation(
            "body",
            format!("Invalid request body: {}", rejection.body_text()),
        ))
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::error!(code = %self.0.code(), error = %self.0, "Payment request failed");
        } else {
            tracing::warn!(code = %self.0.code(), error = %self.0, "Payment request rejected");
        }

        let body = ErrorResponse::new(self.0.message());
        (status, Json(body)).into_response()
    }
}
