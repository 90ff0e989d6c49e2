//! Payment command handlers.
//!
//! The two steps of the checkout handshake: mint an order, then verify the
//! signed result the hosted checkout hands back.

mod create_order;
mod verify_payment;

pub use create_order::{
    CreateOrderCommand, CreateOrderHandler, CreateOrderResult, AMOUNT_AND_CURRENCY_REQUIRED,
};
pub use verify_payment::{
    VerifyPaymentCommand, VerifyPaymentHandler, VerifyPaymentResult,
    MISSING_VERIFICATION_PARAMETERS,
};
