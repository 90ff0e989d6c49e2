//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Razorpay's Orders API. The
//! hosted checkout widget runs in the browser; this side only mints orders.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `STOREFRONT__PAYMENT__RAZORPAY_KEY_ID`: public key id (rzp_...)
//! - `STOREFRONT__PAYMENT__RAZORPAY_KEY_SECRET`: key secret

mod api_types;
mod mock_gateway;
mod razorpay_adapter;

pub use api_types::{RazorpayErrorBody, RazorpayErrorDetail, RazorpayOrder, RazorpayOrderRequest};
pub use mock_gateway::MockPaymentGateway;
pub use razorpay_adapter::{RazorpayConfig, RazorpayGateway};
