//! Storefront Payments - create-order / verify-payment backend.
//!
//! The browser collects an amount, this service mints a gateway order, the
//! hosted checkout widget takes the payment, and the signed result is
//! verified here with HMAC-SHA256 before the storefront trusts it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
