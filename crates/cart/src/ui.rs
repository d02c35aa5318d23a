//! Boundary between the cart core and whatever renders it.

use crate::selection::CheckoutSummary;
use crate::state::CartState;

/// Rendering and messaging surface driven by the cart service.
///
/// The original storefront rendered HTML; here the surface is a trait so
/// a terminal front end, a test harness, or a real view layer can sit
/// behind it. Implementations must not mutate cart state - they only
/// observe it.
pub trait CartUi {
    /// Rebuild the full cart view from the current state.
    fn render_cart(&mut self, state: &CartState);

    /// Update the persistent cart-item-count indicator.
    fn set_cart_count(&mut self, count: usize);

    /// Surface an informational message to the user.
    fn show_message(&mut self, message: &str);

    /// Surface an error message to the user.
    fn show_error(&mut self, message: &str);

    /// Ask the user to confirm an order over the selected subset.
    ///
    /// Returning `true` submits; `false` abandons the attempt with no
    /// state change and no network call.
    fn confirm_checkout(&mut self, summary: &CheckoutSummary) -> bool;
}
