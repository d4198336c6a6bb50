//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{CatalogClient, OrdersClient};
use crate::config::StorefrontConfig;
use crate::store::{CartStore, FavoritesStore, MenuStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// backend clients and the stores built on top of them. The stores are
/// constructed once per process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    orders: OrdersClient,
    catalog: CatalogClient,
    cart: CartStore<OrdersClient>,
    favorites: FavoritesStore<CatalogClient>,
    menu: MenuStore<CatalogClient>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let orders = OrdersClient::new(config.orders_url.clone());
        let catalog =
            CatalogClient::new(config.catalog_url.clone(), config.catalog_cache_ttl_secs);

        let cart = CartStore::new(orders.clone());
        let favorites = FavoritesStore::new(catalog.clone());
        let menu = MenuStore::new(catalog.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                catalog,
                cart,
                favorites,
                menu,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the orders service client.
    #[must_use]
    pub fn orders(&self) -> &OrdersClient {
        &self.inner.orders
    }

    /// Get a reference to the catalog service client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore<OrdersClient> {
        &self.inner.cart
    }

    /// Get a reference to the favorites store.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesStore<CatalogClient> {
        &self.inner.favorites
    }

    /// Get a reference to the menu store.
    #[must_use]
    pub fn menu(&self) -> &MenuStore<CatalogClient> {
        &self.inner.menu
    }
}
