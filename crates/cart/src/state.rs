//! Local mirror of the remote authoritative cart.

use easyshop_core::{Price, ProductId};

use crate::snapshot::{CartItem, CartSnapshot};

/// In-memory mirror of the remote cart.
///
/// Invariant: `items` and `total` always come from the same server
/// response. The only mutation is [`CartState::replace`], which swaps the
/// whole snapshot at once - there is no observable state mixing an old
/// item list with a new total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    snapshot: CartSnapshot,
}

impl CartState {
    /// An empty cart, the state before any server response.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Discard the local view and rebuild it entirely from a server
    /// snapshot.
    ///
    /// Idempotent: applying the same snapshot twice yields the same state.
    pub fn replace(&mut self, snapshot: CartSnapshot) {
        self.snapshot = snapshot;
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.snapshot.items.len()
    }

    /// Sum of unit quantities across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.snapshot
            .items
            .values()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Server-computed cart total.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.snapshot.total
    }

    /// The cart total formatted to two decimal places for presentation.
    ///
    /// Always the server figure - never a client-side sum of line totals,
    /// which would drift from server-side discounts and rounding.
    #[must_use]
    pub fn display_total(&self) -> String {
        self.snapshot.total.display()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.items.is_empty()
    }

    /// Whether a product is currently in the cart.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.snapshot.items.contains_key(&product_id)
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.snapshot.items.get(&product_id)
    }

    /// Line items in display order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.snapshot.items.values()
    }

    /// The snapshot this state was last rebuilt from.
    #[must_use]
    pub const fn as_snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }
}
