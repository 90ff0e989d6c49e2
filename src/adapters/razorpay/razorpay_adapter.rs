//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Razorpay Orders API.
//!
//! # Security
//!
//! - Requests authenticate with HTTP basic auth (`key_id:key_secret`)
//! - The key secret is held as `secrecy::SecretString` and never logged
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret)
//!     .with_timeout(Duration::from_secs(10));
//! let gateway = RazorpayGateway::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::PaymentConfig;
use crate::domain::foundation::OrderId;
use crate::domain::payment::{MinorUnits, Order, OrderDraft};
use crate::ports::{GatewayError, GatewayErrorCode, PaymentGateway};

use super::api_types::{RazorpayErrorBody, RazorpayOrder, RazorpayOrderRequest};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Public key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Key secret paired with the key id.
    key_secret: SecretString,

    /// Base URL for the Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,

    /// Upper bound on a single API call.
    timeout: Duration,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Build from the application's payment settings.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self {
            key_id: config.razorpay_key_id.clone(),
            key_secret: config.razorpay_key_secret.clone(),
            api_base_url: config.api_base_url.clone(),
            timeout: Duration::from_secs(config.gateway_timeout_secs),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Razorpay gateway adapter.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: Client,
}

impl RazorpayGateway {
    /// Create a new adapter with its own HTTP client.
    pub fn new(config: RazorpayConfig) -> Result<Self, GatewayError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.config.api_base_url.trim_end_matches('/'))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::timeout(format!(
                "No response within {}s",
                self.config.timeout.as_secs_f32()
            ))
        } else if e.is_connect() {
            GatewayError::network(format!("Connection failed: {}", e))
        } else {
            GatewayError::network(e.to_string())
        }
    }

    /// Turns a non-2xx response into a `GatewayError`, keeping Razorpay's
    /// own description when the body carries one.
    async fn error_from_response(&self, response: Response) -> GatewayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let code = match status {
            StatusCode::UNAUTHORIZED => GatewayErrorCode::Authentication,
            s if s.is_client_error() => GatewayErrorCode::InvalidRequest,
            _ => GatewayErrorCode::ProviderError,
        };

        let mut err = GatewayError::new(code, format!("Razorpay returned {}", status));
        if let Some(description) = RazorpayErrorBody::parse(&body)
            .as_ref()
            .and_then(RazorpayErrorBody::description)
        {
            err = err.with_provider_description(description);
        }
        err
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, GatewayError> {
        let request = RazorpayOrderRequest {
            amount: draft.amount.value(),
            currency: draft.currency.as_str().to_string(),
            receipt: draft.receipt.as_str().to_string(),
            notes: BTreeMap::new(),
        };

        tracing::debug!(
            amount = request.amount,
            currency = %request.currency,
            receipt = %request.receipt,
            "Creating Razorpay order"
        );

        let response = self
            .http_client
            .post(self.orders_url())
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let err = self.error_from_response(response).await;
            tracing::error!(
                code = %err.code,
                error = %err.message,
                description = err.provider_description.as_deref().unwrap_or(""),
                "Razorpay create_order failed"
            );
            return Err(err);
        }

        let razorpay_order: RazorpayOrder = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse Razorpay response: {}", e))
        })?;

        let id = OrderId::new(razorpay_order.id)
            .map_err(|_| GatewayError::invalid_response("Razorpay order has no id"))?;

        Ok(Order {
            id,
            amount: MinorUnits::new(razorpay_order.amount),
            currency: razorpay_order.currency,
            receipt: razorpay_order.receipt,
            status: razorpay_order.status,
        })
    }
}
