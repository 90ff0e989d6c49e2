//! Gateway orders and the receipt tokens they are minted with.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::money::{Currency, MinorUnits};
use crate::domain::foundation::{OrderId, Timestamp};

/// Gateway limit on receipt length.
pub const MAX_RECEIPT_LEN: usize = 40;

/// Uniqueness token attached to every order-creation request.
///
/// Format: `receipt_<unix millis>_<8 hex chars>`. The random suffix keeps
/// tokens distinct when two orders are created in the same millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptToken(String);

impl ReceiptToken {
    pub fn generate() -> Self {
        Self::generate_at(Timestamp::now())
    }

    pub fn generate_at(at: Timestamp) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("receipt_{}_{}", at.as_unix_millis(), &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What we ask the gateway to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub amount: MinorUnits,
    pub currency: Currency,
    pub receipt: ReceiptToken,
}

impl OrderDraft {
    pub fn new(amount: MinorUnits, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            receipt: ReceiptToken::generate(),
        }
    }
}

/// An order as the gateway reports it. Amount and currency here are
/// authoritative; the client's input is never echoed back in their place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub amount: MinorUnits,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
}
