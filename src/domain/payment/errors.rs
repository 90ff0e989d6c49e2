//! Checkout error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | Gateway | 500 |
//! | VerificationFailed | 400 |

use axum::http::StatusCode;
use thiserror::Error;

use super::signature::VerificationFailure;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Message returned for every rejected checkout result.
pub const VERIFICATION_FAILED_MESSAGE: &str = "Payment verification failed.";

/// Errors surfaced by the checkout handshake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Missing or invalid client input.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Upstream order creation failed.
    #[error("Gateway error: {message}")]
    Gateway { message: String },

    /// Checkout result did not carry the expected signature.
    #[error("Verification failed: {0}")]
    VerificationFailed(VerificationFailure),
}

impl CheckoutError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CheckoutError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        CheckoutError::Gateway {
            message: message.into(),
        }
    }

    pub fn verification_failed(reason: VerificationFailure) -> Self {
        CheckoutError::VerificationFailed(reason)
    }

    /// Client-facing message.
    pub fn message(&self) -> String {
        match self {
            CheckoutError::Validation { message, .. } => message.clone(),
            CheckoutError::Gateway { message } => message.clone(),
            CheckoutError::VerificationFailed(_) => VERIFICATION_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::Validation { .. } => ErrorCode::ValidationFailed,
            CheckoutError::Gateway { .. } => ErrorCode::GatewayError,
            CheckoutError::VerificationFailed(_) => ErrorCode::VerificationFailed,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckoutError::Validation { .. } | CheckoutError::VerificationFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            CheckoutError::Gateway { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
