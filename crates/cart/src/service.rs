//! Cart service facade.
//!
//! Owns the local cart mirror and drives every operation through the
//! remote store. Each successful response replaces the mirror wholesale;
//! each failure leaves it untouched and surfaces a message through the
//! UI boundary. After a checkout the mirror is reconciled by a full
//! reload, never by removing the ordered lines locally - the server may
//! apply business rules the client cannot see.

use std::time::Duration;

use tracing::warn;

use easyshop_core::ProductId;

use crate::checkout::CheckoutOutcome;
use crate::selection::SelectionSet;
use crate::session::UserSession;
use crate::snapshot::CheckoutRequest;
use crate::state::CartState;
use crate::store::CartStore;
use crate::ui::CartUi;

/// User-facing failure strings for the cart operations.
const ADD_FAILED: &str = "Add to cart failed.";
const LOAD_FAILED: &str = "Load cart failed.";
const UPDATE_FAILED: &str = "Update cart failed.";
const CLEAR_FAILED: &str = "Empty cart failed.";
const CHECKOUT_FAILED: &str = "Checkout failed. Please try again.";
const SELECT_ITEMS: &str = "Please select items to checkout.";

/// How long the checkout success message stays visible before the full
/// cart re-render.
const DEFAULT_CHECKOUT_MESSAGE_DELAY: Duration = Duration::from_millis(1500);

/// Orchestrates cart mutations and checkout against a remote store.
///
/// One service instance per client session. Operations are serialized by
/// the `&mut self` receiver; the server's atomicity per mutation plus
/// wholesale replacement of local state make client-side locking
/// unnecessary.
pub struct CartService<S, U> {
    store: S,
    ui: U,
    session: UserSession,
    state: CartState,
    checkout_message_delay: Duration,
    submitting: bool,
}

impl<S: CartStore, U: CartUi> CartService<S, U> {
    /// Create a service with an empty local cart.
    pub fn new(store: S, ui: U, session: UserSession) -> Self {
        Self {
            store,
            ui,
            session,
            state: CartState::empty(),
            checkout_message_delay: DEFAULT_CHECKOUT_MESSAGE_DELAY,
            submitting: false,
        }
    }

    /// Override the delay between the checkout success message and the
    /// cart re-render. Tests pass `Duration::ZERO`.
    #[must_use]
    pub fn with_checkout_message_delay(mut self, delay: Duration) -> Self {
        self.checkout_message_delay = delay;
        self
    }

    /// Session start: pull the remote cart if the user is signed in.
    pub async fn start(&mut self) {
        if self.session.is_authenticated() {
            self.load_cart().await;
        }
    }

    /// The current local mirror.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// The session context attached to every request.
    #[must_use]
    pub const fn session(&self) -> &UserSession {
        &self.session
    }

    /// Rebuild the full cart view from the current mirror.
    pub fn render(&mut self) {
        self.ui.render_cart(&self.state);
    }

    /// Add one unit of a product to the remote cart.
    ///
    /// On success the mirror is replaced from the response and the cart
    /// count indicator updated; on failure the mirror is unchanged.
    pub async fn add_to_cart(&mut self, product_id: ProductId) {
        match self.store.add_product(&self.session, product_id).await {
            Ok(snapshot) => {
                self.state.replace(snapshot);
                self.ui.set_cart_count(self.state.item_count());
            }
            Err(e) => {
                warn!(%product_id, error = %e, "add to cart failed");
                self.ui.show_error(ADD_FAILED);
            }
        }
    }

    /// Resynchronize the mirror from the remote cart unconditionally.
    ///
    /// This is the primitive used on session start and after checkout.
    pub async fn load_cart(&mut self) {
        match self.store.load_cart(&self.session).await {
            Ok(snapshot) => {
                self.state.replace(snapshot);
                self.ui.set_cart_count(self.state.item_count());
            }
            Err(e) => {
                warn!(error = %e, "load cart failed");
                self.ui.show_error(LOAD_FAILED);
            }
        }
    }

    /// Set a line's quantity on the remote cart.
    pub async fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        match self
            .store
            .update_quantity(&self.session, product_id, quantity)
            .await
        {
            Ok(snapshot) => {
                self.state.replace(snapshot);
                self.ui.set_cart_count(self.state.item_count());
                self.ui.render_cart(&self.state);
            }
            Err(e) => {
                warn!(%product_id, quantity, error = %e, "update quantity failed");
                self.ui.show_error(UPDATE_FAILED);
            }
        }
    }

    /// Empty the remote cart and re-render the (expected-empty) result.
    pub async fn clear_cart(&mut self) {
        match self.store.clear_cart(&self.session).await {
            Ok(snapshot) => {
                self.state.replace(snapshot);
                self.ui.set_cart_count(self.state.item_count());
                self.ui.render_cart(&self.state);
            }
            Err(e) => {
                warn!(error = %e, "clear cart failed");
                self.ui.show_error(CLEAR_FAILED);
            }
        }
    }

    /// Run one checkout attempt over a UI-selected subset of the cart.
    ///
    /// The selection is validated against the current mirror (stale ids
    /// dropped), summarized for confirmation, and submitted as product
    /// ids only - the server re-derives quantities and prices from its
    /// own cart. An empty selection aborts before any network call.
    ///
    /// On success the order id is surfaced, the mirror is rebuilt by a
    /// full reload, and the cart view re-renders after the message delay.
    /// On failure the server's message is surfaced when it sent one, and
    /// the mirror is left exactly as it was.
    pub async fn checkout(
        &mut self,
        selected: impl IntoIterator<Item = ProductId>,
    ) -> CheckoutOutcome {
        if self.submitting {
            return CheckoutOutcome::AlreadySubmitting;
        }

        let selection = SelectionSet::from_ui(selected, &self.state);
        if selection.is_empty() {
            self.ui.show_error(SELECT_ITEMS);
            return CheckoutOutcome::EmptySelection;
        }

        let summary = selection.summarize(&self.state);
        if !self.ui.confirm_checkout(&summary) {
            return CheckoutOutcome::Declined;
        }

        self.submitting = true;
        let request = CheckoutRequest {
            selected_product_ids: selection.product_ids().to_vec(),
        };
        let result = self.store.submit_order(&self.session, &request).await;
        self.submitting = false;

        match result {
            Ok(confirmation) => {
                self.load_cart().await;
                self.ui.show_message(&format!(
                    "Order #{} placed successfully.",
                    confirmation.order_id
                ));
                if !self.checkout_message_delay.is_zero() {
                    tokio::time::sleep(self.checkout_message_delay).await;
                }
                self.ui.render_cart(&self.state);
                CheckoutOutcome::Placed(confirmation.order_id)
            }
            Err(e) => {
                warn!(error = %e, "order submission failed");
                let message = e.server_message().unwrap_or(CHECKOUT_FAILED).to_owned();
                self.ui.show_error(&message);
                CheckoutOutcome::Failed(e)
            }
        }
    }

    /// Tear down the session: drop credentials, reset the mirror, and
    /// zero the cart indicator.
    pub fn logout(&mut self) {
        self.session.logout();
        self.state = CartState::empty();
        self.ui.set_cart_count(0);
    }
}
