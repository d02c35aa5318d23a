//! Integration tests for the partial-selection checkout protocol.
//!
//! These tests verify the non-emptiness guard, the confirmation step,
//! submission of ids only, reload-based reconciliation on success, and
//! failure isolation.

use easyshop_cart::{CartError, CheckoutOutcome, OrderConfirmation};
use easyshop_core::{OrderId, ProductId};

use easyshop_integration_tests::{
    MockStore, RecordingUi, StoreCall, UiEvent, service, snapshot,
};

fn two_item_store() -> (MockStore, RecordingUi) {
    let store = MockStore::new();
    let ui = RecordingUi::new();
    store.queue_load(Ok(snapshot(&[
        (1, "Smartphone", "10.00", 1),
        (2, "Laptop", "15.00", 1),
    ])));
    (store, ui)
}

// =============================================================================
// Validation Guard
// =============================================================================

#[tokio::test]
async fn test_empty_selection_aborts_without_network_call() {
    let (store, ui) = two_item_store();
    let mut cart = service(&store, &ui);
    cart.load_cart().await;

    let outcome = cart.checkout([]).await;

    assert!(matches!(outcome, CheckoutOutcome::EmptySelection));
    assert_eq!(store.submit_call_count(), 0);
    assert_eq!(
        ui.errors(),
        vec!["Please select items to checkout.".to_string()]
    );
}

#[tokio::test]
async fn test_selection_of_only_stale_ids_aborts() {
    let (store, ui) = two_item_store();
    let mut cart = service(&store, &ui);
    cart.load_cart().await;

    // Product 99 was removed from the cart since the user last saw it.
    let outcome = cart.checkout([ProductId::new(99)]).await;

    assert!(matches!(outcome, CheckoutOutcome::EmptySelection));
    assert_eq!(store.submit_call_count(), 0);
}

// =============================================================================
// Confirmation
// =============================================================================

#[tokio::test]
async fn test_confirmation_shows_selected_subset_figures() {
    let (store, ui) = two_item_store();
    ui.set_confirm_answer(false);
    let mut cart = service(&store, &ui);
    cart.load_cart().await;

    let outcome = cart.checkout([ProductId::new(1)]).await;

    assert!(matches!(outcome, CheckoutOutcome::Declined));
    assert_eq!(store.submit_call_count(), 0);
    assert!(ui.events().contains(&UiEvent::ConfirmPrompt(
        "Items: 1 (1 products)\nTotal: $10.00".to_string()
    )));
}

#[tokio::test]
async fn test_decline_leaves_state_unchanged() {
    let (store, ui) = two_item_store();
    ui.set_confirm_answer(false);
    let mut cart = service(&store, &ui);
    cart.load_cart().await;
    let before = cart.state().clone();

    cart.checkout([ProductId::new(1), ProductId::new(2)]).await;

    assert_eq!(cart.state(), &before);
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_checkout_success_reloads_from_server() {
    let (store, ui) = two_item_store();
    store.queue_submit(Ok(OrderConfirmation {
        order_id: OrderId::new(42),
    }));
    // The post-checkout reload is the only thing that decides what
    // remains; here the server kept product 2.
    let remaining = snapshot(&[(2, "Laptop", "15.00", 1)]);
    store.queue_load(Ok(remaining.clone()));

    let mut cart = service(&store, &ui);
    cart.load_cart().await;

    let outcome = cart.checkout([ProductId::new(1)]).await;

    assert!(matches!(
        outcome,
        CheckoutOutcome::Placed(id) if id == OrderId::new(42)
    ));
    assert_eq!(
        store.calls(),
        vec![
            StoreCall::Load,
            StoreCall::Submit(vec![ProductId::new(1)]),
            StoreCall::Load,
        ]
    );
    assert_eq!(cart.state().as_snapshot(), &remaining);
    assert_eq!(
        ui.messages(),
        vec!["Order #42 placed successfully.".to_string()]
    );
}

#[tokio::test]
async fn test_success_rerenders_after_message() {
    let (store, ui) = two_item_store();
    store.queue_submit(Ok(OrderConfirmation {
        order_id: OrderId::new(7),
    }));
    store.queue_load(Ok(snapshot(&[])));

    let mut cart = service(&store, &ui);
    cart.load_cart().await;
    cart.checkout([ProductId::new(1), ProductId::new(2)]).await;

    let events = ui.events();
    let message_at = events
        .iter()
        .position(|e| matches!(e, UiEvent::Message(_)))
        .expect("success message shown");
    let render_at = events
        .iter()
        .position(|e| matches!(e, UiEvent::Rendered { .. }))
        .expect("cart re-rendered");
    assert!(message_at < render_at);
    assert!(events.contains(&UiEvent::Rendered { item_count: 0 }));
}

#[tokio::test]
async fn test_submission_carries_only_deduplicated_ids() {
    let (store, ui) = two_item_store();
    store.queue_submit(Ok(OrderConfirmation {
        order_id: OrderId::new(1),
    }));
    store.queue_load(Ok(snapshot(&[])));

    let mut cart = service(&store, &ui);
    cart.load_cart().await;
    cart.checkout([
        ProductId::new(2),
        ProductId::new(1),
        ProductId::new(2),
        ProductId::new(99),
    ])
    .await;

    assert!(store.calls().contains(&StoreCall::Submit(vec![
        ProductId::new(1),
        ProductId::new(2),
    ])));
}

// =============================================================================
// Failure Isolation
// =============================================================================

#[tokio::test]
async fn test_checkout_failure_surfaces_server_message() {
    let (store, ui) = two_item_store();
    store.queue_submit(Err(CartError::Api {
        status: 400,
        message: "Inventory unavailable".to_string(),
    }));

    let mut cart = service(&store, &ui);
    cart.load_cart().await;
    let before = cart.state().clone();

    let outcome = cart.checkout([ProductId::new(1)]).await;

    assert!(matches!(outcome, CheckoutOutcome::Failed(_)));
    assert_eq!(ui.errors(), vec!["Inventory unavailable".to_string()]);
    // Byte-for-byte: the attempt must not touch the mirror.
    assert_eq!(cart.state(), &before);
    // And no reload happens on failure; the view keeps what it had.
    assert_eq!(store.load_call_count(), 1);
}

#[tokio::test]
async fn test_checkout_failure_falls_back_to_generic_message() {
    let (store, ui) = two_item_store();
    store.queue_submit(Err(CartError::Api {
        status: 500,
        message: String::new(),
    }));

    let mut cart = service(&store, &ui);
    cart.load_cart().await;
    cart.checkout([ProductId::new(1)]).await;

    assert_eq!(
        ui.errors(),
        vec!["Checkout failed. Please try again.".to_string()]
    );
}
