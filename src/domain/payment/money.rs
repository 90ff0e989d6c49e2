//! Amounts and currencies.
//!
//! Clients send decimal major-unit amounts (`500.50` rupees); the gateway only
//! ever sees integer minor units (`50050` paise).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Out-of-range reason for amounts that round to zero minor units.
pub const SMALLER_THAN_MINOR_UNIT: &str = "amount is smaller than one minor currency unit";

/// Out-of-range reason for amounts that do not fit in `u64` minor units.
pub const TOO_LARGE: &str = "amount is too large";

/// Amount in the smallest denomination of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Converts a client-supplied decimal amount: multiply by 100, round half
    /// away from zero.
    ///
    /// # Errors
    ///
    /// - `NotPositive` when the amount is zero or negative
    /// - `OutOfRange` when the converted amount is zero or does not fit in `u64`
    pub fn from_major(amount: Decimal) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::not_positive("amount"));
        }

        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_u64())
            .ok_or_else(|| ValidationError::out_of_range("amount", TOO_LARGE))?;

        if minor == 0 {
            return Err(ValidationError::out_of_range("amount", SMALLER_THAN_MINOR_UNIT));
        }

        Ok(Self(minor))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 alphabetic currency code, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "expected a three-letter ISO code",
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
