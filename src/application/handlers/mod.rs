//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    CreateOrderCommand, CreateOrderHandler, CreateOrderResult, VerifyPaymentCommand,
    VerifyPaymentHandler, VerifyPaymentResult,
};
