//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! Field names are camelCase on the wire to match the storefront client.
//! Every response carries `success` and `message`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::application::handlers::payment::{
    CreateOrderCommand, CreateOrderResult, VerifyPaymentCommand,
};
use crate::domain::foundation::ValidationError;
use crate::domain::payment::{CheckoutError, SMALLER_THAN_MINOR_UNIT, TOO_LARGE};

/// Message for an amount that is present but not a number.
pub const AMOUNT_NOT_NUMERIC: &str = "Amount must be a number.";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create an order.
///
/// `amount` is kept as raw JSON so that `500`, `500.5` and `"500"` are all
/// accepted, and `null` or `""` count as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl CreateOrderRequest {
    pub fn into_command(self) -> Result<CreateOrderCommand, CheckoutError> {
        let amount = match self.amount {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(Value::String(s)) => Some(parse_decimal(s.trim())?),
            Some(Value::Number(n)) => Some(parse_decimal(&n.to_string())?),
            Some(_) => return Err(CheckoutError::validation("amount", AMOUNT_NOT_NUMERIC)),
        };

        Ok(CreateOrderCommand {
            amount,
            currency: self.currency,
        })
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, CheckoutError> {
    if let Ok(amount) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return Ok(amount);
    }

    // Well-formed numbers outside Decimal's range or precision still get an amount error
    let well_formed = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    let value = match raw.parse::<f64>() {
        Ok(value) if well_formed && !value.is_nan() => value,
        _ => return Err(CheckoutError::validation("amount", AMOUNT_NOT_NUMERIC)),
    };

    let err = if value <= 0.0 {
        ValidationError::not_positive("amount")
    } else if value < 1.0 {
        ValidationError::out_of_range("amount", SMALLER_THAN_MINOR_UNIT)
    } else {
        ValidationError::out_of_range("amount", TOO_LARGE)
    };
    Err(err.into())
}

/// Checkout result relayed by the browser.
///
/// Accepts the widget's native `razorpay_*` field names as well.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default, rename = "orderId", alias = "razorpay_order_id")]
    pub order_id: Option<String>,
    #[serde(default, rename = "paymentId", alias = "razorpay_payment_id")]
    pub payment_id: Option<String>,
    #[serde(default, alias = "razorpay_signature")]
    pub signature: Option<String>,
}

impl From<VerifyPaymentRequest> for VerifyPaymentCommand {
    fn from(req: VerifyPaymentRequest) -> Self {
        Self {
            order_id: req.order_id,
            payment_id: req.payment_id,
            signature: req.signature,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a minted order. Amount is in minor units, as the checkout
/// widget expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub message: String,
}

impl From<CreateOrderResult> for CreateOrderResponse {
    fn from(result: CreateOrderResult) -> Self {
        Self {
            success: true,
            order_id: result.order.id.to_string(),
            amount: result.order.amount.value(),
            currency: result.order.currency,
            message: "Order created successfully".to_string(),
        }
    }
}

/// Response for an accepted checkout result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
}

impl VerifyPaymentResponse {
    pub fn verified() -> Self {
        Self {
            success: true,
            message: "Payment verified successfully.".to_string(),
        }
    }
}

/// What the client needs to open the hosted checkout widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfigResponse {
    pub key_id: String,
    pub currency: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
