//! Wire types for the canonical cart snapshot.
//!
//! The server returns the same `{ total, items }` structure after every
//! mutation or load; `items` is keyed by product id. The client never
//! edits these values - it swaps whole snapshots into [`crate::CartState`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use easyshop_core::{OrderId, Price, ProductId};

/// Canonical cart snapshot returned by the remote store.
///
/// `total` is the server-computed figure for the whole cart; it is not
/// derivable client-side because the server may apply discounts or
/// rounding the client cannot see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub total: Price,
    pub items: BTreeMap<ProductId, CartItem>,
}

/// One product entry in the cart with quantity and computed subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    #[serde(default)]
    pub discount_percent: Decimal,
    /// `quantity x product.price`, computed server-side and trusted as
    /// given.
    pub line_total: Price,
}

/// Descriptive product attributes. Opaque to the cart core beyond `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// Order submission request body.
///
/// Carries only the selected product ids - never quantities or prices.
/// The server re-derives those from its own authoritative cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub selected_product_ids: Vec<ProductId>,
}

/// Order identifier returned by a successful submission.
///
/// The server responds with the full order record; only the id matters to
/// the client, and unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot() {
        let body = r#"{
            "total": 25.00,
            "items": {
                "1": {
                    "product": {
                        "productId": 1,
                        "name": "Smartphone",
                        "price": 10.00,
                        "description": "A phone",
                        "imageUrl": "smartphone.jpg"
                    },
                    "quantity": 1,
                    "discountPercent": 0,
                    "lineTotal": 10.00
                },
                "2": {
                    "product": {
                        "productId": 2,
                        "name": "Laptop",
                        "price": 7.50,
                        "description": "",
                        "imageUrl": "laptop.jpg"
                    },
                    "quantity": 2,
                    "discountPercent": 0,
                    "lineTotal": 15.00
                }
            }
        }"#;

        let snapshot: CartSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.items.len(), 2);

        let first = snapshot.items.get(&ProductId::new(1)).unwrap();
        assert_eq!(first.product.name, "Smartphone");
        assert_eq!(first.quantity, 1);
        assert_eq!(first.line_total.display(), "$10.00");
        assert_eq!(snapshot.total.display(), "$25.00");
    }

    #[test]
    fn test_deserialize_empty_snapshot() {
        let snapshot: CartSnapshot = serde_json::from_str(r#"{"total": 0, "items": {}}"#).unwrap();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, Price::ZERO);
    }

    #[test]
    fn test_missing_total_is_rejected() {
        let result = serde_json::from_str::<CartSnapshot>(r#"{"items": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_items_is_rejected() {
        let result = serde_json::from_str::<CartSnapshot>(r#"{"total": 10.00}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_product_fields_default() {
        let body = r#"{
            "total": 10.00,
            "items": {
                "1": {
                    "product": { "productId": 1, "name": "Widget", "price": 10.00 },
                    "quantity": 1,
                    "lineTotal": 10.00
                }
            }
        }"#;

        let snapshot: CartSnapshot = serde_json::from_str(body).unwrap();
        let item = snapshot.items.get(&ProductId::new(1)).unwrap();
        assert_eq!(item.product.description, "");
        assert_eq!(item.discount_percent, Decimal::ZERO);
    }

    #[test]
    fn test_checkout_request_wire_shape() {
        let request = CheckoutRequest {
            selected_product_ids: vec![ProductId::new(1), ProductId::new(3)],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "selectedProductIds": [1, 3] }));
    }

    #[test]
    fn test_order_confirmation_ignores_extra_fields() {
        // The server returns the full order record; only orderId matters.
        let body = r#"{ "orderId": 42, "userId": 7, "shippingAmount": 0 }"#;
        let confirmation: OrderConfirmation = serde_json::from_str(body).unwrap();
        assert_eq!(confirmation.order_id, OrderId::new(42));
    }
}
