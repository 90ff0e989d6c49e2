//! Payment gateway port for order creation.
//!
//! Defines the contract for the external gateway (e.g. Razorpay) that mints
//! orders. The hosted checkout widget runs in the browser and never talks to
//! this port.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any order-based gateway
//! - **No implicit retry**: Failures propagate to the caller immediately

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payment::{CheckoutError, Order, OrderDraft};

/// Generic message when the gateway gave no usable description.
pub const ORDER_CREATION_FAILED_MESSAGE: &str = "Failed to create order.";

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order for the given amount, currency and receipt.
    ///
    /// Returns the order as the gateway recorded it.
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, GatewayError>;
}

/// Errors from gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Internal message, for logs.
    pub message: String,

    /// Human-readable description from the gateway (if available).
    pub provider_description: Option<String>,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_description: None,
        }
    }

    /// Attach the gateway's own error description.
    pub fn with_provider_description(mut self, description: impl Into<String>) -> Self {
        self.provider_description = Some(description.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Timeout, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }

    /// Message safe to show the client.
    pub fn client_message(&self) -> String {
        match &self.provider_description {
            Some(description) if !description.trim().is_empty() => {
                format!("Payment gateway error: {}", description)
            }
            _ => ORDER_CREATION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for CheckoutError {
    fn from(err: GatewayError) -> Self {
        CheckoutError::gateway(err.client_message())
    }
}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Network connectivity issue.
    Network,

    /// Gateway did not answer within the configured bound.
    Timeout,

    /// API credentials rejected.
    Authentication,

    /// Gateway rejected the request parameters.
    InvalidRequest,

    /// Gateway-side failure.
    ProviderError,

    /// Gateway answered with a body we could not parse.
    InvalidResponse,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::Network => "network_error",
            GatewayErrorCode::Timeout => "timeout",
            GatewayErrorCode::Authentication => "authentication_error",
            GatewayErrorCode::InvalidRequest => "invalid_request",
            GatewayErrorCode::ProviderError => "provider_error",
            GatewayErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
