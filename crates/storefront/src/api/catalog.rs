//! Client for the catalog service (products, favorites, recent).

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use ovenside_core::ProductId;

use super::conversions::{convert_favorites, convert_product, convert_recent};
use super::types::{Product, RecentBoard};
use super::wire::{WireFavorite, WireProducts, WireRecent};
use super::{ApiError, decode};
use crate::store::CatalogApi;

const PRODUCTS_CACHE_KEY: &str = "products";

#[derive(Serialize)]
struct ProductIdBody {
    product_id: ProductId,
}

/// Client for the catalog service.
///
/// The full product list is cached (TTL from configuration, matching the
/// cache the service keeps in front of its own database). Favorites and
/// the recent board are mutable or per-render and are never cached.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base: Url,
    products_cache: Cache<String, Vec<Product>>,
}

impl CatalogClient {
    /// Create a new catalog client for the given base URL.
    #[must_use]
    pub fn new(base: Url, cache_ttl_secs: u64) -> Self {
        let products_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(cache_ttl_secs))
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base,
                products_cache,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        // Url renders a bare host with a trailing slash; trim it so paths
        // never double-slash.
        format!("{}/{path}", self.inner.base.as_str().trim_end_matches('/'))
    }

    /// Fetch the full product list, serving from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self
            .inner
            .products_cache
            .get(PRODUCTS_CACHE_KEY)
            .await
        {
            debug!("cache hit for products");
            return Ok(products);
        }

        let response = self
            .inner
            .client
            .get(self.url("get_products"))
            .send()
            .await?;
        let payload: WireProducts = decode(response).await?;
        let products: Vec<Product> = payload.products.into_iter().map(convert_product).collect();

        self.inner
            .products_cache
            .insert(PRODUCTS_CACHE_KEY.to_string(), products.clone())
            .await;

        Ok(products)
    }

    /// Fetch the favorites list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[instrument(skip(self))]
    pub async fn get_favorites(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url("get_favorites"))
            .send()
            .await?;
        let payload: Vec<WireFavorite> = decode(response).await?;
        Ok(convert_favorites(payload))
    }

    /// Mark a product as favorite. Idempotent on the service side.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_favorite(&self, product_id: ProductId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("favorite"))
            .json(&ProductIdBody { product_id })
            .send()
            .await?;
        decode::<Value>(response).await?;
        Ok(())
    }

    /// Remove a product from favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not a favorite or the request
    /// fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_favorite(&self, product_id: ProductId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.url("favorite"))
            .json(&ProductIdBody { product_id })
            .send()
            .await?;
        decode::<Value>(response).await?;
        Ok(())
    }

    /// Fetch the recently/popularly ordered board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[instrument(skip(self))]
    pub async fn get_recent(&self) -> Result<RecentBoard, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url("get_recent"))
            .send()
            .await?;
        let payload: WireRecent = decode(response).await?;
        Ok(convert_recent(payload))
    }

}

impl CatalogApi for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_products().await
    }

    async fn fetch_favorites(&self) -> Result<Vec<Product>, ApiError> {
        self.get_favorites().await
    }

    async fn create_favorite(&self, product_id: ProductId) -> Result<(), ApiError> {
        self.add_favorite(product_id).await
    }

    async fn delete_favorite(&self, product_id: ProductId) -> Result<(), ApiError> {
        self.remove_favorite(product_id).await
    }
}
