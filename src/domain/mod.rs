//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `payment` - Order drafts, amounts, checkout signatures, payment events

pub mod foundation;
pub mod payment;
