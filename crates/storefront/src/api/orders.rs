//! Client for the orders service (cart and order placement).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use ovenside_core::ProductId;

use super::conversions::{convert_cart, convert_receipt};
use super::types::{Address, CartSnapshot, OrderReceipt};
use super::wire::{WireCart, WireReceiptEnvelope};
use super::{ApiError, decode};
use crate::store::OrdersApi;

#[derive(Serialize)]
struct ProductIdBody {
    product_id: ProductId,
}

#[derive(Serialize)]
struct AdditionBody<'a> {
    addition_name: &'a str,
}

#[derive(Serialize)]
struct OrderBody<'a> {
    address: &'a Address,
}

/// Client for the orders service.
///
/// Cheaply cloneable via `Arc`. Cart responses are never cached; the cart
/// is mutable state owned by the service.
#[derive(Clone)]
pub struct OrdersClient {
    inner: Arc<OrdersClientInner>,
}

struct OrdersClientInner {
    client: reqwest::Client,
    base: Url,
}

impl OrdersClient {
    /// Create a new orders client for the given base URL.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            inner: Arc::new(OrdersClientInner {
                client: reqwest::Client::new(),
                base,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        // Url renders a bare host with a trailing slash; trim it so paths
        // never double-slash.
        format!("{}/{path}", self.inner.base.as_str().trim_end_matches('/'))
    }

    /// Fetch the cart and normalize it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[instrument(skip(self))]
    pub async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError> {
        let response = self.inner.client.get(self.url("cart")).send().await?;
        let cart: WireCart = decode(response).await?;
        Ok(convert_cart(cart))
    }

    /// Add one unit of a product (creates the line or increments it).
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the product or the request
    /// fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_item(&self, product_id: ProductId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("cart"))
            .json(&ProductIdBody { product_id })
            .send()
            .await?;
        decode::<Value>(response).await?;
        Ok(())
    }

    /// Remove a line entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.url(&format!("cart/{product_id}")))
            .send()
            .await?;
        decode::<Value>(response).await?;
        Ok(())
    }

    /// Decrement a line by one unit (the service removes it at zero).
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn decrement_item(&self, product_id: ProductId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(&format!("cart/{product_id}/decrement")))
            .send()
            .await?;
        decode::<Value>(response).await?;
        Ok(())
    }

    /// Toggle a topping on a cart line.
    ///
    /// Older deployments of the orders service expose the operation at
    /// `/toggle` instead of `/toggle_addition`, so a 404 on the primary
    /// path falls back once to the legacy one.
    ///
    /// # Errors
    ///
    /// Returns an error if both endpoints reject the request.
    #[instrument(skip(self), fields(product_id = %product_id, addition = %addition))]
    pub async fn toggle_addition(
        &self,
        product_id: ProductId,
        addition: &str,
    ) -> Result<(), ApiError> {
        let body = AdditionBody {
            addition_name: addition,
        };

        let response = self
            .inner
            .client
            .post(self.url(&format!("cart/{product_id}/toggle_addition")))
            .json(&body)
            .send()
            .await?;

        match decode::<Value>(response).await {
            Ok(_) => Ok(()),
            Err(err) if err.is_not_found() => {
                tracing::debug!("toggle_addition endpoint missing, falling back to /toggle");
                let response = self
                    .inner
                    .client
                    .post(self.url(&format!("cart/{product_id}/toggle")))
                    .json(&body)
                    .send()
                    .await?;
                decode::<Value>(response).await?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Empty the server-side cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        let response = self.inner.client.delete(self.url("cart")).send().await?;
        decode::<Value>(response).await?;
        Ok(())
    }

    /// Place an order for the current server-side cart.
    ///
    /// The body carries only the delivery address; the service derives the
    /// positions and the payment sum from the cart it already holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty server-side or the request
    /// fails.
    #[instrument(skip(self, address))]
    pub async fn place_order(&self, address: &Address) -> Result<OrderReceipt, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("make_order"))
            .json(&OrderBody { address })
            .send()
            .await?;
        let envelope: WireReceiptEnvelope = decode(response).await?;
        Ok(convert_receipt(envelope))
    }

    /// Ping the service's health endpoint, for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.inner.client.get(self.url("health")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                body: String::new(),
            })
        }
    }
}

impl OrdersApi for OrdersClient {
    async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError> {
        Self::fetch_cart(self).await
    }

    async fn add_item(&self, product_id: ProductId) -> Result<(), ApiError> {
        Self::add_item(self, product_id).await
    }

    async fn remove_item(&self, product_id: ProductId) -> Result<(), ApiError> {
        Self::remove_item(self, product_id).await
    }

    async fn decrement_item(&self, product_id: ProductId) -> Result<(), ApiError> {
        Self::decrement_item(self, product_id).await
    }

    async fn toggle_addition(&self, product_id: ProductId, addition: &str) -> Result<(), ApiError> {
        Self::toggle_addition(self, product_id, addition).await
    }

    async fn clear_cart(&self) -> Result<(), ApiError> {
        Self::clear_cart(self).await
    }

    async fn place_order(&self, address: &Address) -> Result<OrderReceipt, ApiError> {
        Self::place_order(self, address).await
    }
}
