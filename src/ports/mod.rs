//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - External gateway that mints orders
//! - `PaymentEventPublisher` - Sink for events emitted by the checkout handshake

mod event_publisher;
mod payment_gateway;

pub use event_publisher::PaymentEventPublisher;
pub use payment_gateway::{
    GatewayError, GatewayErrorCode, PaymentGateway, ORDER_CREATION_FAILED_MESSAGE,
};
