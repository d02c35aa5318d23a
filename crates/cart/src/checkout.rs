//! Checkout attempt outcomes.

use easyshop_core::OrderId;

use crate::error::CartError;

/// Terminal result of one checkout attempt.
///
/// One attempt moves through selection, confirmation, and submission;
/// every early exit is represented so callers can react without
/// re-reading UI state.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Nothing valid was selected; no request was made.
    EmptySelection,
    /// The user declined the confirmation prompt; no request was made.
    Declined,
    /// Another submission was still in flight; this attempt never started.
    AlreadySubmitting,
    /// The order was accepted by the server.
    Placed(OrderId),
    /// Submission failed; local state was left untouched.
    Failed(CartError),
}

impl CheckoutOutcome {
    /// Whether the attempt ended with an accepted order.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}
