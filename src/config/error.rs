//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid Razorpay key id format")]
    InvalidRazorpayKeyId,

    #[error("Invalid payment gateway URL")]
    InvalidGatewayUrl,

    #[error("Payment gateway URL must use HTTPS in production")]
    GatewayUrlMustBeHttps,

    #[error("Invalid payment gateway timeout")]
    InvalidGatewayTimeout,

    #[error("Payment gateway timeout ({gateway_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    GatewayTimeoutNotWithinRequest { gateway_secs: u64, request_secs: u64 },

    #[error("Default currency must be a three-letter ISO code")]
    InvalidDefaultCurrency,
}
