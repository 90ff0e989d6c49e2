//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `razorpay` - Payment gateway (Razorpay Orders API, plus a mock)
//! - `events` - Payment event publishers (tracing, in-memory)
//! - `http` - REST API

pub mod events;
pub mod http;
pub mod razorpay;

pub use events::{InMemoryEventPublisher, TracingEventPublisher};
pub use razorpay::{MockPaymentGateway, RazorpayConfig, RazorpayGateway};
