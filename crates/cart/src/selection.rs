//! Transient checkout selection.
//!
//! Selection is ephemeral UI intent, not cart data: it is rebuilt from
//! user input at the moment of checkout, validated against the current
//! mirror, and discarded after the attempt regardless of outcome.

use std::fmt;

use easyshop_core::{Price, ProductId};

use crate::state::CartState;

/// The subset of line items the user marked for a checkout attempt.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Vec<ProductId>,
}

impl SelectionSet {
    /// Build a selection from UI-supplied ids, keeping only ids that
    /// exist in the current cart.
    ///
    /// Stale ids (removed from the cart since the last sync) are dropped
    /// silently; duplicates collapse to one entry.
    #[must_use]
    pub fn from_ui(selected: impl IntoIterator<Item = ProductId>, cart: &CartState) -> Self {
        let mut ids: Vec<ProductId> = selected
            .into_iter()
            .filter(|id| cart.contains(*id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// Whether nothing valid was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of distinct selected products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// The selected product ids.
    #[must_use]
    pub fn product_ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Aggregate the selected subset for the confirmation step.
    #[must_use]
    pub fn summarize(&self, cart: &CartState) -> CheckoutSummary {
        let mut total_quantity = 0u64;
        let mut total = Price::ZERO;
        for id in &self.ids {
            if let Some(item) = cart.get(*id) {
                total_quantity += u64::from(item.quantity);
                total = total + item.line_total;
            }
        }
        CheckoutSummary {
            selected_products: self.ids.len(),
            total_quantity,
            total,
        }
    }
}

/// Figures shown to the user before an order is submitted.
///
/// Computed over the selected subset only, from server-supplied line
/// totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Distinct products selected.
    pub selected_products: usize,
    /// Units across the selected lines.
    pub total_quantity: u64,
    /// Sum of the selected line totals.
    pub total: Price,
}

impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Items: {} ({} products)\nTotal: {}",
            self.total_quantity,
            self.selected_products,
            self.total.display()
        )
    }
}
