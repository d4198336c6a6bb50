//! Favorites store: membership by list containment.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::instrument;

use ovenside_core::ProductId;

use super::CatalogApi;
use crate::api::ApiError;
use crate::api::types::Product;

/// The favorites store.
///
/// Membership is containment in the list, not a flag on the product.
/// Unlike the cart there is no busy guard; concurrent toggles on the same
/// product may interleave.
pub struct FavoritesStore<T> {
    api: T,
    products: Mutex<Vec<Product>>,
}

impl<T: CatalogApi> FavoritesStore<T> {
    pub fn new(api: T) -> Self {
        Self {
            api,
            products: Mutex::new(Vec::new()),
        }
    }

    fn products_mut(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current favorites, in service order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products_mut().clone()
    }

    /// Whether a product is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.products_mut()
            .iter()
            .any(|product| product.id == product_id)
    }

    /// Refresh the list from the catalog service.
    ///
    /// # Errors
    ///
    /// Returns the API error; the current list is kept on failure.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ApiError> {
        let products = self.api.fetch_favorites().await?;
        *self.products_mut() = products;
        Ok(())
    }

    /// Toggle membership by current state, returning the new state.
    ///
    /// Adding refreshes the whole list (the service carries the product
    /// payload); removing drops the entry locally.
    ///
    /// # Errors
    ///
    /// Returns the API error; local state is only changed on success.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn toggle(&self, product_id: ProductId) -> Result<bool, ApiError> {
        if self.is_favorite(product_id) {
            self.api.delete_favorite(product_id).await?;
            self.products_mut()
                .retain(|product| product.id != product_id);
            Ok(false)
        } else {
            self.api.create_favorite(product_id).await?;
            self.load().await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::types::{Characteristics, ProductKind};
    use rust_decimal::dec;
    use std::collections::{BTreeMap, VecDeque};

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            cost: dec!(5),
            preview_link: None,
            kind: ProductKind::Snack,
            ingredients: Vec::new(),
            additions: BTreeMap::new(),
            characteristics: Characteristics::default(),
        }
    }

    #[derive(Default)]
    struct Scripted {
        favorites: Mutex<VecDeque<Result<Vec<Product>, ApiError>>>,
        create_calls: Mutex<Vec<ProductId>>,
        delete_calls: Mutex<Vec<ProductId>>,
    }

    impl CatalogApi for Scripted {
        async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
            Ok(Vec::new())
        }

        async fn fetch_favorites(&self) -> Result<Vec<Product>, ApiError> {
            self.favorites
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create_favorite(&self, product_id: ProductId) -> Result<(), ApiError> {
            self.create_calls.lock().unwrap().push(product_id);
            Ok(())
        }

        async fn delete_favorite(&self, product_id: ProductId) -> Result<(), ApiError> {
            self.delete_calls.lock().unwrap().push(product_id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_membership_by_containment() {
        let api = Scripted::default();
        api.favorites
            .lock()
            .unwrap()
            .push_back(Ok(vec![product(1), product(2)]));

        let store = FavoritesStore::new(api);
        store.load().await.unwrap();

        assert!(store.is_favorite(ProductId::new(1)));
        assert!(!store.is_favorite(ProductId::new(3)));
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let api = Scripted::default();
        // Refresh after the add returns the new list.
        api.favorites.lock().unwrap().push_back(Ok(vec![product(1)]));

        let store = FavoritesStore::new(api);

        let now_favorite = store.toggle(ProductId::new(1)).await.unwrap();
        assert!(now_favorite);
        assert!(store.is_favorite(ProductId::new(1)));
        assert_eq!(store.api.create_calls.lock().unwrap().len(), 1);

        let now_favorite = store.toggle(ProductId::new(1)).await.unwrap();
        assert!(!now_favorite);
        assert!(!store.is_favorite(ProductId::new(1)));
        assert_eq!(store.api.delete_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_current_list() {
        let api = Scripted::default();
        api.favorites.lock().unwrap().push_back(Ok(vec![product(1)]));
        api.favorites.lock().unwrap().push_back(Err(ApiError::Status {
            status: 500,
            body: String::new(),
        }));

        let store = FavoritesStore::new(api);
        store.load().await.unwrap();
        assert!(store.load().await.is_err());
        assert_eq!(store.products().len(), 1);
    }
}
