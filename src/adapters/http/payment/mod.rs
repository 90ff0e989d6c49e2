//! HTTP adapter for payment endpoints.
//!
//! Exposes the checkout handshake via REST API:
//! - `POST /api/payment/create-order` - Mint a gateway order
//! - `POST /api/payment/verify-payment` - Verify a checkout signature
//! - `GET /api/payment/checkout-config` - Public settings for the checkout widget

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::{payment_router, payment_routes};
