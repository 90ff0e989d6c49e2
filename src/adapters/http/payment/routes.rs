//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{checkout_config, create_order, verify_payment, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
/// - `POST /create-order` - Mint a gateway order
/// - `POST /verify-payment` - Verify a checkout signature
/// - `GET /checkout-config` - Public key id and default currency
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify-payment", post(verify_payment))
        .route("/checkout-config", get(checkout_config))
}

/// Create the payment module router, mounted at `/api/payment`.
///
/// # Example
///
/// ```ignore
/// let app = payment_router().with_state(PaymentAppState::new(/* ... */));
/// ```
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/api/payment", payment_routes())
}
