//! Payment domain - the create-order / verify-payment handshake.
//!
//! - `money` - decimal-to-minor-unit conversion and currency codes
//! - `order` - order drafts, gateway orders, receipt tokens
//! - `signature` - HMAC-SHA256 checkout signature verification
//! - `events` - events published after each handshake step
//! - `errors` - checkout error taxonomy with HTTP status mapping

mod errors;
mod events;
mod money;
mod order;
mod signature;

pub use errors::{CheckoutError, VERIFICATION_FAILED_MESSAGE};
pub use events::PaymentEvent;
pub use money::{Currency, MinorUnits, SMALLER_THAN_MINOR_UNIT, TOO_LARGE};
pub use order::{Order, OrderDraft, ReceiptToken, MAX_RECEIPT_LEN};
pub use signature::{
    CheckoutSignature, CheckoutSignatureVerifier, VerificationFailure, VerificationOutcome,
    VerificationRequest,
};
