//! In-process stores backing the interactive parts of the page.
//!
//! Each store owns its slice of state (cart lines, favorites list, product
//! catalog plus active filters), synchronizes it with the backend services,
//! and hands out immutable snapshots for rendering. The network edge of
//! every store is a trait, so the state-transition logic is tested against
//! scripted in-memory transports instead of a live service.

pub mod cart;
pub mod favorites;
pub mod menu;

pub use cart::{CartError, CartStore};
pub use favorites::FavoritesStore;
pub use menu::{MenuPartition, MenuStore};

use crate::api::types::{Address, CartSnapshot, OrderReceipt, Product};
use crate::api::ApiError;

use ovenside_core::ProductId;

/// Result of a store operation that may be skipped by the busy guard.
///
/// A second cart mutation while one is in flight is a silent no-op, never
/// queued; `Busy` tells the caller the operation did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Done(T),
    Busy,
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Network edge of the cart store.
pub trait OrdersApi: Send + Sync {
    fn fetch_cart(&self) -> impl Future<Output = Result<CartSnapshot, ApiError>> + Send;
    fn add_item(&self, product_id: ProductId) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn remove_item(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn decrement_item(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn toggle_addition(
        &self,
        product_id: ProductId,
        addition: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn clear_cart(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn place_order(
        &self,
        address: &Address,
    ) -> impl Future<Output = Result<OrderReceipt, ApiError>> + Send;
}

/// Network edge of the menu and favorites stores.
pub trait CatalogApi: Send + Sync {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;
    fn fetch_favorites(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;
    fn create_favorite(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn delete_favorite(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
