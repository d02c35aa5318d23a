//! Integration tests for the EasyShop cart client.
//!
//! # Test Categories
//!
//! - `cart_sync` - local mirror synchronization against the remote store
//! - `checkout` - the partial-selection checkout protocol
//!
//! This library provides the shared test doubles: [`MockStore`], a
//! scripted [`CartStore`] that records every call, and [`RecordingUi`],
//! a [`easyshop_cart::CartUi`] that captures rendered state and messages.
//! Both hand out cloneable handles so a test can keep inspecting them
//! after moving a clone into the service under test.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use rust_decimal::Decimal;

use easyshop_cart::{
    CartError, CartItem, CartService, CartSnapshot, CartState, CartStore, CartUi,
    CheckoutRequest, CheckoutSummary, OrderConfirmation, Product, UserSession,
};
use easyshop_core::{Price, ProductId};

// =============================================================================
// Snapshot Builders
// =============================================================================

/// Parse a decimal literal into a price.
///
/// # Panics
///
/// Panics on a non-decimal literal; test input only.
#[must_use]
pub fn money(literal: &str) -> Price {
    Price::new(literal.parse().expect("decimal literal"))
}

/// Build a server-style snapshot from `(product id, name, unit price,
/// quantity)` lines. Line totals and the cart total are derived the way
/// the server derives them.
#[must_use]
pub fn snapshot(lines: &[(i32, &str, &str, u32)]) -> CartSnapshot {
    let mut items = BTreeMap::new();
    for &(id, name, unit_price, quantity) in lines {
        let price = money(unit_price);
        let line_total = Price::new(price.amount() * Decimal::from(quantity));
        items.insert(
            ProductId::new(id),
            CartItem {
                product: Product {
                    product_id: ProductId::new(id),
                    name: name.to_string(),
                    price,
                    description: String::new(),
                    image_url: String::new(),
                },
                quantity,
                discount_percent: Decimal::ZERO,
                line_total,
            },
        );
    }
    let total = items.values().map(|item| item.line_total).sum();
    CartSnapshot { total, items }
}

/// An empty server snapshot.
#[must_use]
pub fn empty_snapshot() -> CartSnapshot {
    snapshot(&[])
}

// =============================================================================
// MockStore
// =============================================================================

/// One recorded call against the scripted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Add(ProductId),
    Load,
    UpdateQuantity(ProductId, u32),
    Clear,
    Submit(Vec<ProductId>),
}

#[derive(Default)]
struct MockStoreInner {
    calls: RefCell<Vec<StoreCall>>,
    add_results: RefCell<VecDeque<Result<CartSnapshot, CartError>>>,
    load_results: RefCell<VecDeque<Result<CartSnapshot, CartError>>>,
    update_results: RefCell<VecDeque<Result<CartSnapshot, CartError>>>,
    clear_results: RefCell<VecDeque<Result<CartSnapshot, CartError>>>,
    submit_results: RefCell<VecDeque<Result<OrderConfirmation, CartError>>>,
}

/// Scripted remote store that records every call.
///
/// Each operation pops the next queued result for that endpoint; an
/// unqueued call panics, so tests state exactly the traffic they expect.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Rc<MockStoreInner>,
}

impl MockStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_add(&self, result: Result<CartSnapshot, CartError>) {
        self.inner.add_results.borrow_mut().push_back(result);
    }

    pub fn queue_load(&self, result: Result<CartSnapshot, CartError>) {
        self.inner.load_results.borrow_mut().push_back(result);
    }

    pub fn queue_update(&self, result: Result<CartSnapshot, CartError>) {
        self.inner.update_results.borrow_mut().push_back(result);
    }

    pub fn queue_clear(&self, result: Result<CartSnapshot, CartError>) {
        self.inner.clear_results.borrow_mut().push_back(result);
    }

    pub fn queue_submit(&self, result: Result<OrderConfirmation, CartError>) {
        self.inner.submit_results.borrow_mut().push_back(result);
    }

    /// Every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.calls.borrow().clone()
    }

    /// Number of load calls made so far.
    #[must_use]
    pub fn load_call_count(&self) -> usize {
        self.inner
            .calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, StoreCall::Load))
            .count()
    }

    /// Number of order submissions made so far.
    #[must_use]
    pub fn submit_call_count(&self) -> usize {
        self.inner
            .calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, StoreCall::Submit(_)))
            .count()
    }

    fn record(&self, call: StoreCall) {
        self.inner.calls.borrow_mut().push(call);
    }
}

impl CartStore for MockStore {
    async fn add_product(
        &self,
        _session: &UserSession,
        product_id: ProductId,
    ) -> Result<CartSnapshot, CartError> {
        self.record(StoreCall::Add(product_id));
        self.inner
            .add_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected add_product call")
    }

    async fn load_cart(&self, _session: &UserSession) -> Result<CartSnapshot, CartError> {
        self.record(StoreCall::Load);
        self.inner
            .load_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected load_cart call")
    }

    async fn update_quantity(
        &self,
        _session: &UserSession,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        self.record(StoreCall::UpdateQuantity(product_id, quantity));
        self.inner
            .update_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected update_quantity call")
    }

    async fn clear_cart(&self, _session: &UserSession) -> Result<CartSnapshot, CartError> {
        self.record(StoreCall::Clear);
        self.inner
            .clear_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected clear_cart call")
    }

    async fn submit_order(
        &self,
        _session: &UserSession,
        request: &CheckoutRequest,
    ) -> Result<OrderConfirmation, CartError> {
        self.record(StoreCall::Submit(request.selected_product_ids.clone()));
        self.inner
            .submit_results
            .borrow_mut()
            .pop_front()
            .expect("unexpected submit_order call")
    }
}

// =============================================================================
// RecordingUi
// =============================================================================

/// One recorded UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A full cart render, captured as the item count shown.
    Rendered { item_count: usize },
    /// The cart-count indicator was updated.
    CartCount(usize),
    /// An informational message was surfaced.
    Message(String),
    /// An error message was surfaced.
    Error(String),
    /// The confirmation prompt was shown with this text.
    ConfirmPrompt(String),
}

#[derive(Default)]
struct RecordingUiInner {
    events: RefCell<Vec<UiEvent>>,
    confirm_answer: Cell<bool>,
}

/// UI double that records every interaction and answers the confirmation
/// prompt with a preset response (accept, by default).
#[derive(Clone)]
pub struct RecordingUi {
    inner: Rc<RecordingUiInner>,
}

impl Default for RecordingUi {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingUi {
    #[must_use]
    pub fn new() -> Self {
        let inner = RecordingUiInner::default();
        inner.confirm_answer.set(true);
        Self {
            inner: Rc::new(inner),
        }
    }

    /// Preset the answer for the next confirmation prompts.
    pub fn set_confirm_answer(&self, answer: bool) {
        self.inner.confirm_answer.set(answer);
    }

    /// Every interaction so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<UiEvent> {
        self.inner.events.borrow().clone()
    }

    /// Error messages surfaced so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.inner
            .events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Error(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Informational messages surfaced so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Message(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: UiEvent) {
        self.inner.events.borrow_mut().push(event);
    }
}

impl CartUi for RecordingUi {
    fn render_cart(&mut self, state: &CartState) {
        self.record(UiEvent::Rendered {
            item_count: state.item_count(),
        });
    }

    fn set_cart_count(&mut self, count: usize) {
        self.record(UiEvent::CartCount(count));
    }

    fn show_message(&mut self, message: &str) {
        self.record(UiEvent::Message(message.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.record(UiEvent::Error(message.to_string()));
    }

    fn confirm_checkout(&mut self, summary: &CheckoutSummary) -> bool {
        self.record(UiEvent::ConfirmPrompt(summary.to_string()));
        self.inner.confirm_answer.get()
    }
}

// =============================================================================
// Service Construction
// =============================================================================

/// Build a service over handles to the given doubles, with the checkout
/// message delay zeroed so tests run instantly.
#[must_use]
pub fn service(store: &MockStore, ui: &RecordingUi) -> CartService<MockStore, RecordingUi> {
    service_with_session(store, ui, UserSession::anonymous())
}

/// Like [`service`], with an explicit session.
#[must_use]
pub fn service_with_session(
    store: &MockStore,
    ui: &RecordingUi,
    session: UserSession,
) -> CartService<MockStore, RecordingUi> {
    CartService::new(store.clone(), ui.clone(), session)
        .with_checkout_message_delay(Duration::ZERO)
}
