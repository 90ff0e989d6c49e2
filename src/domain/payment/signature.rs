//! Checkout signature verification.
//!
//! After the hosted checkout completes, the widget hands the browser an
//! `(order id, payment id, signature)` triple. The signature is
//! `hex(HMAC-SHA256(key_secret, "<order id>|<payment id>"))`, so only a party
//! holding the key secret can produce it. Recomputing it server-side is the
//! only integrity guarantee the checkout flow has.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

use crate::domain::foundation::{OrderId, PaymentId, ValidationError};

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded SHA-256 MAC.
const SIGNATURE_HEX_LEN: usize = 64;

/// Signature string exactly as the client supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSignature(String);

impl CheckoutSignature {
    pub fn new(signature: impl Into<String>) -> Result<Self, ValidationError> {
        let signature = signature.into();
        if signature.is_empty() {
            return Err(ValidationError::empty_field("signature"));
        }
        Ok(Self(signature))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(&self) -> bool {
        self.0.len() == SIGNATURE_HEX_LEN && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

/// A checkout result to be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub signature: CheckoutSignature,
}

/// Why a checkout result was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationFailure {
    /// Well-formed signature that does not match the expected one.
    SignatureMismatch,

    /// Supplied value is not a 64-character hex string.
    MalformedSignature,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerificationFailure::SignatureMismatch => "signature_mismatch",
            VerificationFailure::MalformedSignature => "malformed_signature",
        };
        write!(f, "{}", s)
    }
}

/// Verification result. Never carries the expected signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub authentic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<VerificationFailure>,
}

impl VerificationOutcome {
    pub fn authentic() -> Self {
        Self {
            authentic: true,
            failure: None,
        }
    }

    pub fn rejected(reason: VerificationFailure) -> Self {
        Self {
            authentic: false,
            failure: Some(reason),
        }
    }

    pub fn is_authentic(&self) -> bool {
        self.authentic
    }
}

/// Recomputes and checks checkout signatures with the server-held key secret.
pub struct CheckoutSignatureVerifier {
    secret: SecretString,
}

impl CheckoutSignatureVerifier {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Hex-encoded HMAC-SHA256 of `"<order id>|<payment id>"`.
    pub fn sign(&self, order_id: &OrderId, payment_id: &PaymentId) -> String {
        let payload = format!("{}|{}", order_id.as_str(), payment_id.as_str());

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Byte-for-byte, constant-time comparison against the expected signature.
    pub fn verify(&self, request: &VerificationRequest) -> VerificationOutcome {
        if !request.signature.is_well_formed() {
            return VerificationOutcome::rejected(VerificationFailure::MalformedSignature);
        }

        let expected = self.sign(&request.order_id, &request.payment_id);
        let matches: bool = expected
            .as_bytes()
            .ct_eq(request.signature.as_str().as_bytes())
            .into();

        if matches {
            VerificationOutcome::authentic()
        } else {
            VerificationOutcome::rejected(VerificationFailure::SignatureMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // hex(HMAC-SHA256("s3cret", "order_abc|pay_123"))
    const REFERENCE_SIGNATURE: &str =
        "85fe2073d0f4d9dcfa1975b4804eee657cfa330ad893c7f326ccddec1ba10bc9";

    fn verifier(secret: &str) -> CheckoutSignatureVerifier {
        CheckoutSignatureVerifier::new(SecretString::new(secret.to_string()))
    }

    fn request(order_id: &str, payment_id: &str, signature: &str) -> VerificationRequest {
        VerificationRequest {
            order_id: OrderId::new(order_id).unwrap(),
            payment_id: PaymentId::new(payment_id).unwrap(),
            signature: CheckoutSignature::new(signature).unwrap(),
        }
    }

    fn reference_hmac(secret: &str, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    // ══════════════════════════════════════════════════════════════
    // Known vector
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn sign_matches_reference_vector() {
        let signature = verifier("s3cret").sign(
            &OrderId::new("order_abc").unwrap(),
            &PaymentId::new("pay_123").unwrap(),
        );
        assert_eq!(signature, REFERENCE_SIGNATURE);
    }

    #[test]
    fn reference_signature_is_authentic() {
        let outcome = verifier("s3cret").verify(&request("order_abc", "pay_123", REFERENCE_SIGNATURE));
        assert_eq!(outcome, VerificationOutcome::authentic());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let outcome = verifier("other").verify(&request("order_abc", "pay_123", REFERENCE_SIGNATURE));
        assert_eq!(
            outcome,
            VerificationOutcome::rejected(VerificationFailure::SignatureMismatch)
        );
    }

    #[test]
    fn swapped_ids_are_rejected() {
        let outcome = verifier("s3cret").verify(&request("pay_123", "order_abc", REFERENCE_SIGNATURE));
        assert!(!outcome.is_authentic());
    }

    // ══════════════════════════════════════════════════════════════
    // Malformed input
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn upper_case_hex_is_not_byte_identical() {
        let upper = REFERENCE_SIGNATURE.to_ascii_uppercase();
        let outcome = verifier("s3cret").verify(&request("order_abc", "pay_123", &upper));
        assert_eq!(
            outcome.failure,
            Some(VerificationFailure::SignatureMismatch)
        );
    }

    #[test]
    fn truncated_signature_is_malformed() {
        let outcome = verifier("s3cret").verify(&request(
            "order_abc",
            "pay_123",
            &REFERENCE_SIGNATURE[..63],
        ));
        assert_eq!(
            outcome.failure,
            Some(VerificationFailure::MalformedSignature)
        );
    }

    #[test]
    fn non_hex_signature_is_malformed() {
        let outcome = verifier("s3cret").verify(&request("order_abc", "pay_123", &"z".repeat(64)));
        assert_eq!(
            outcome.failure,
            Some(VerificationFailure::MalformedSignature)
        );
    }

    #[test]
    fn empty_signature_fails_construction() {
        assert_eq!(
            CheckoutSignature::new(""),
            Err(ValidationError::empty_field("signature"))
        );
    }

    #[test]
    fn outcome_serialization_omits_failure_when_authentic() {
        let json = serde_json::to_string(&VerificationOutcome::authentic()).unwrap();
        assert_eq!(json, r#"{"authentic":true}"#);

        let json = serde_json::to_string(&VerificationOutcome::rejected(
            VerificationFailure::SignatureMismatch,
        ))
        .unwrap();
        assert_eq!(json, r#"{"authentic":false,"failure":"signature_mismatch"}"#);
    }

    // ══════════════════════════════════════════════════════════════
    // Properties
    // ══════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn sign_equals_reference_hmac(
            order_id in "order_[A-Za-z0-9]{1,20}",
            payment_id in "pay_[A-Za-z0-9]{1,20}",
            secret in "[ -~]{1,40}",
        ) {
            let expected = reference_hmac(&secret, &format!("{}|{}", order_id, payment_id));
            let signature = verifier(&secret).sign(
                &OrderId::new(order_id.clone()).unwrap(),
                &PaymentId::new(payment_id.clone()).unwrap(),
            );
            prop_assert_eq!(&signature, &expected);

            let outcome = verifier(&secret).verify(&request(&order_id, &payment_id, &expected));
            prop_assert!(outcome.is_authentic());
        }

        #[test]
        fn any_single_character_mutation_is_rejected(
            position in 0usize..64,
            replacement in proptest::char::range('0', 'z'),
        ) {
            let original = REFERENCE_SIGNATURE.as_bytes()[position] as char;
            prop_assume!(replacement != original);

            let mut mutated = REFERENCE_SIGNATURE.to_string();
            mutated.replace_range(position..position + 1, &replacement.to_string());

            let outcome = verifier("s3cret").verify(&request("order_abc", "pay_123", &mutated));
            prop_assert!(!outcome.is_authentic());
            prop_assert!(outcome.failure.is_some());
        }
    }
}
