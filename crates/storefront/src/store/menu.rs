//! Menu store: product catalog with client-side ingredient filtering.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::instrument;

use super::CatalogApi;
use crate::api::ApiError;
use crate::api::types::{Product, ProductKind};

/// Products that pass the active filter, split into the fixed categories.
///
/// Products with an unrecognized type pass the filter but land in no grid.
#[derive(Debug, Clone, Default)]
pub struct MenuPartition {
    pub pizzas: Vec<Product>,
    pub snacks: Vec<Product>,
    pub drinks: Vec<Product>,
}

#[derive(Default)]
struct MenuState {
    products: Vec<Product>,
    /// Active ingredient filter, lowercased. Empty means no filtering.
    filters: BTreeSet<String>,
}

/// The menu store.
///
/// Holds the full catalog and the active ingredient filter set. A product
/// passes when no filter is selected, or when its ingredient and topping
/// set intersects the selection (OR semantics, case-insensitive).
pub struct MenuStore<T> {
    api: T,
    state: Mutex<MenuState>,
}

impl<T: CatalogApi> MenuStore<T> {
    pub fn new(api: T) -> Self {
        Self {
            api,
            state: Mutex::new(MenuState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, MenuState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Refresh the catalog from the catalog service.
    ///
    /// # Errors
    ///
    /// Returns the API error; the current catalog is kept on failure.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ApiError> {
        let products = self.api.fetch_products().await?;
        self.state().products = products;
        Ok(())
    }

    /// Replace the active filter set. Selections are lowercased.
    pub fn set_filters<I, S>(&self, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filters = selected
            .into_iter()
            .map(|name| name.as_ref().to_lowercase())
            .collect();
        self.state().filters = filters;
    }

    /// Clear the filter selection.
    pub fn reset_filters(&self) {
        self.state().filters.clear();
    }

    /// Active filter selection.
    #[must_use]
    pub fn filters(&self) -> BTreeSet<String> {
        self.state().filters.clone()
    }

    /// The full catalog, unfiltered.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state().products.clone()
    }

    /// Products passing the active filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<Product> {
        let state = self.state();
        state
            .products
            .iter()
            .filter(|product| passes(product, &state.filters))
            .cloned()
            .collect()
    }

    /// Products passing the active filter, split by category.
    #[must_use]
    pub fn by_category(&self) -> MenuPartition {
        let mut partition = MenuPartition::default();
        for product in self.filtered() {
            match product.kind {
                ProductKind::Pizza => partition.pizzas.push(product),
                ProductKind::Snack => partition.snacks.push(product),
                ProductKind::Drink => partition.drinks.push(product),
                ProductKind::Other => {}
            }
        }
        partition
    }

    /// The filter panel's checkbox list: the sorted, de-duplicated
    /// lowercase union of every product's ingredients and toppings.
    #[must_use]
    pub fn ingredient_options(&self) -> Vec<String> {
        let state = self.state();
        let mut options = BTreeSet::new();
        for product in &state.products {
            options.extend(ingredient_set(product));
        }
        options.into_iter().collect()
    }
}

/// A product's combined ingredient and topping names, lowercased.
fn ingredient_set(product: &Product) -> BTreeSet<String> {
    product
        .ingredients
        .iter()
        .map(String::as_str)
        .chain(product.additions.keys().map(String::as_str))
        .map(str::to_lowercase)
        .collect()
}

/// OR semantics: pass when nothing is selected, or when at least one
/// selected ingredient appears in the product.
fn passes(product: &Product, filters: &BTreeSet<String>) -> bool {
    if filters.is_empty() {
        return true;
    }
    let ingredients = ingredient_set(product);
    filters.iter().any(|filter| ingredients.contains(filter))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::types::Characteristics;
    use ovenside_core::ProductId;
    use rust_decimal::dec;
    use std::collections::BTreeMap;

    fn product(
        id: i64,
        kind: ProductKind,
        ingredients: &[&str],
        additions: &[&str],
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            cost: dec!(5),
            preview_link: None,
            kind,
            ingredients: ingredients.iter().map(ToString::to_string).collect(),
            additions: additions
                .iter()
                .map(|name| ((*name).to_string(), false))
                .collect::<BTreeMap<_, _>>(),
            characteristics: Characteristics::default(),
        }
    }

    struct Fixed(Vec<Product>);

    impl CatalogApi for Fixed {
        async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
            Ok(self.0.clone())
        }

        async fn fetch_favorites(&self) -> Result<Vec<Product>, ApiError> {
            Ok(Vec::new())
        }

        async fn create_favorite(&self, _product_id: ProductId) -> Result<(), ApiError> {
            Ok(())
        }

        async fn delete_favorite(&self, _product_id: ProductId) -> Result<(), ApiError> {
            Ok(())
        }
    }

    async fn loaded_store() -> MenuStore<Fixed> {
        let store = MenuStore::new(Fixed(vec![
            product(1, ProductKind::Pizza, &["Tomato", "Cheese"], &["Bacon"]),
            product(2, ProductKind::Pizza, &["mushrooms"], &[]),
            product(3, ProductKind::Snack, &["potato"], &[]),
            product(4, ProductKind::Drink, &[], &[]),
            product(5, ProductKind::Other, &["cheese"], &[]),
        ]));
        store.load().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_no_filters_returns_full_set() {
        let store = loaded_store().await;
        assert_eq!(store.filtered().len(), 5);
    }

    #[tokio::test]
    async fn test_or_semantics_case_insensitive() {
        let store = loaded_store().await;
        store.set_filters(["CHEESE", "Potato"]);

        let passing: Vec<i64> = store
            .filtered()
            .iter()
            .map(|product| product.id.as_i64())
            .collect();
        assert_eq!(passing, vec![1, 3, 5]);
    }

    #[tokio::test]
    async fn test_additions_count_as_ingredients() {
        let store = loaded_store().await;
        store.set_filters(["bacon"]);
        assert_eq!(store.filtered().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_restores_full_set() {
        let store = loaded_store().await;
        store.set_filters(["mushrooms"]);
        assert_eq!(store.filtered().len(), 1);

        store.reset_filters();
        assert_eq!(store.filtered().len(), 5);
        assert!(store.filters().is_empty());
    }

    #[tokio::test]
    async fn test_by_category_excludes_unknown_kinds() {
        let store = loaded_store().await;
        let partition = store.by_category();
        assert_eq!(partition.pizzas.len(), 2);
        assert_eq!(partition.snacks.len(), 1);
        assert_eq!(partition.drinks.len(), 1);
    }

    #[tokio::test]
    async fn test_ingredient_options_sorted_deduplicated() {
        let store = loaded_store().await;
        let options = store.ingredient_options();
        assert_eq!(
            options,
            vec!["bacon", "cheese", "mushrooms", "potato", "tomato"]
        );
    }
}
