//! Razorpay Orders API wire types.
//!
//! Only the fields this service reads are modelled; unknown fields are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /v1/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayOrderRequest {
    /// Amount in minor units (paise for INR).
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
    /// Free-form key/value pairs stored on the order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
}

/// Order entity as returned by the Orders API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpayOrder {
    pub id: String,
    #[serde(default)]
    pub entity: Option<String>,
    pub amount: u64,
    #[serde(default)]
    pub amount_paid: Option<u64>,
    #[serde(default)]
    pub amount_due: Option<u64>,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: String,
    #[serde(default)]
    pub attempts: Option<u32>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Error envelope Razorpay returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorBody {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl RazorpayErrorBody {
    /// Parses an error body, returning `None` for anything that is not the
    /// standard envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The human-readable description, if non-blank.
    pub fn description(&self) -> Option<&str> {
        self.error
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
