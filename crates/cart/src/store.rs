//! Remote cart store access.
//!
//! [`CartStore`] is the seam between the synchronization core and the
//! wire; [`HttpCartStore`] is the production implementation over the
//! EasyShop JSON API. Tests substitute scripted doubles behind the same
//! trait.

use serde::de::DeserializeOwned;
use tracing::instrument;

use easyshop_core::ProductId;

use crate::config::CartConfig;
use crate::error::CartError;
use crate::session::UserSession;
use crate::snapshot::{CartSnapshot, CheckoutRequest, OrderConfirmation};

/// Remote authoritative cart operations.
///
/// Every mutation returns the canonical snapshot the server holds after
/// applying it, so callers can replace their local view wholesale.
///
/// Futures returned here are driven on a single task; no `Send` bound is
/// promised.
#[allow(async_fn_in_trait)]
pub trait CartStore {
    /// Add one unit of a product to the cart.
    async fn add_product(
        &self,
        session: &UserSession,
        product_id: ProductId,
    ) -> Result<CartSnapshot, CartError>;

    /// Fetch the current cart.
    async fn load_cart(&self, session: &UserSession) -> Result<CartSnapshot, CartError>;

    /// Set the quantity of a line already in the cart.
    async fn update_quantity(
        &self,
        session: &UserSession,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartSnapshot, CartError>;

    /// Remove every line from the cart.
    async fn clear_cart(&self, session: &UserSession) -> Result<CartSnapshot, CartError>;

    /// Submit an order for the selected product ids.
    async fn submit_order(
        &self,
        session: &UserSession,
        request: &CheckoutRequest,
    ) -> Result<OrderConfirmation, CartError>;
}

// =============================================================================
// HttpCartStore
// =============================================================================

/// EasyShop API client.
///
/// Thin `reqwest` wrapper: one method per endpoint, bearer auth attached
/// from the session when present, bodies parsed after the status check so
/// error responses can surface their server message.
#[derive(Clone)]
pub struct HttpCartStore {
    client: reqwest::Client,
    base_url: url::Url,
}

impl HttpCartStore {
    /// Create a new API client from configuration.
    #[must_use]
    pub fn new(config: &CartConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Build a full endpoint URL from a relative path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Attach session credentials to a request, if any.
    fn with_auth(
        request: reqwest::RequestBuilder,
        session: &UserSession,
    ) -> reqwest::RequestBuilder {
        match session.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Read a JSON body out of a response.
    ///
    /// Reads the body as text first so both error statuses and parse
    /// failures can be diagnosed from the same bytes.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CartError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CartError::Api {
                status: status.as_u16(),
                message: extract_server_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "response body did not match the expected shape"
            );
            CartError::MalformedSnapshot(e.to_string())
        })
    }
}

impl CartStore for HttpCartStore {
    #[instrument(skip(self, session))]
    async fn add_product(
        &self,
        session: &UserSession,
        product_id: ProductId,
    ) -> Result<CartSnapshot, CartError> {
        let url = self.endpoint(&format!("cart/products/{product_id}"));
        let response = Self::with_auth(self.client.post(&url), session)
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, session))]
    async fn load_cart(&self, session: &UserSession) -> Result<CartSnapshot, CartError> {
        let url = self.endpoint("cart");
        let response = Self::with_auth(self.client.get(&url), session).send().await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, session))]
    async fn update_quantity(
        &self,
        session: &UserSession,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        let url = self.endpoint(&format!("cart/products/{product_id}"));
        let response = Self::with_auth(self.client.put(&url), session)
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, session))]
    async fn clear_cart(&self, session: &UserSession) -> Result<CartSnapshot, CartError> {
        let url = self.endpoint("cart");
        let response = Self::with_auth(self.client.delete(&url), session)
            .send()
            .await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self, session, request))]
    async fn submit_order(
        &self,
        session: &UserSession,
        request: &CheckoutRequest,
    ) -> Result<OrderConfirmation, CartError> {
        let url = self.endpoint("orders");
        let response = Self::with_auth(self.client.post(&url), session)
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }
}

/// Pull the `message` field out of an error body, if the server sent one.
fn extract_server_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ApiErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = CartConfig::new(url::Url::parse("http://localhost:8080/").unwrap());
        let store = HttpCartStore::new(&config);
        assert_eq!(store.endpoint("cart"), "http://localhost:8080/cart");
        assert_eq!(
            store.endpoint("cart/products/3"),
            "http://localhost:8080/cart/products/3"
        );
    }

    #[test]
    fn test_endpoint_preserves_path_prefix() {
        let config = CartConfig::new(url::Url::parse("https://shop.example.com/api").unwrap());
        let store = HttpCartStore::new(&config);
        assert_eq!(store.endpoint("orders"), "https://shop.example.com/api/orders");
    }

    #[test]
    fn test_extract_server_message() {
        assert_eq!(
            extract_server_message(r#"{"message": "Shopping cart is empty."}"#),
            "Shopping cart is empty."
        );
    }

    #[test]
    fn test_extract_server_message_missing_field() {
        assert_eq!(extract_server_message(r#"{"error": "Bad Request"}"#), "");
    }

    #[test]
    fn test_extract_server_message_non_json_body() {
        assert_eq!(extract_server_message("<html>502 Bad Gateway</html>"), "");
    }
}
