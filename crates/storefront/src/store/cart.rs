//! Cart store: optimistic updates with rollback against the orders service.
//!
//! Mutations follow the same protocol throughout: apply the change locally
//! first (badge bump, line edit, or snapshot drop), issue the request, then
//! reload the cart to reconcile with the service. On any failure the local
//! change is rolled back and a domain error is surfaced; no retry, no
//! backoff, no partial-failure distinction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::instrument;

use ovenside_core::ProductId;

use super::{Outcome, OrdersApi};
use crate::api::ApiError;
use crate::api::types::{Address, CartSnapshot, OrderReceipt};

/// Domain failures of cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart is empty")]
    Empty,

    #[error("Specify the street and house number")]
    MissingStreet,

    #[error("Specify the apartment or office number")]
    MissingApartment,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Default)]
struct CartState {
    snapshot: CartSnapshot,
    /// Displayed badge count. Tracks the sum of quantities but moves ahead
    /// of it during an optimistic update.
    badge: u32,
}

/// Releases the busy flag when the operation finishes.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// The cart store.
///
/// A single atomic busy flag serializes mutating operations; at most one
/// is in flight at a time and a second call is a silent no-op. The
/// internal reload that reconciles after a mutation bypasses the flag.
pub struct CartStore<T> {
    api: T,
    state: Mutex<CartState>,
    busy: AtomicBool,
}

impl<T: OrdersApi> CartStore<T> {
    pub fn new(api: T) -> Self {
        Self {
            api,
            state: Mutex::new(CartState::default()),
            busy: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, CartState> {
        // The lock is never held across an await, so poisoning can only
        // come from a panicking test assertion.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(BusyGuard { flag: &self.busy })
    }

    /// Current cart snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.state().snapshot.clone()
    }

    /// Current badge count.
    #[must_use]
    pub fn badge(&self) -> u32 {
        self.state().badge
    }

    /// Move the badge by `delta`, clamped at a floor of zero.
    fn bump_badge(&self, delta: i64) {
        let mut state = self.state();
        let next = i64::from(state.badge).saturating_add(delta).max(0);
        state.badge = u32::try_from(next).unwrap_or(0);
    }

    /// Fetch and normalize the cart; any failure resets to empty.
    async fn reload(&self) {
        let snapshot = match self.api.fetch_cart().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "cart reload failed, resetting to empty");
                CartSnapshot::default()
            }
        };
        let mut state = self.state();
        state.badge = snapshot.item_count();
        state.snapshot = snapshot;
    }

    /// Load the cart from the orders service.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Outcome {
        let Some(_guard) = self.try_begin() else {
            return Outcome::Busy;
        };
        self.reload().await;
        Outcome::Done(())
    }

    /// Add one unit of a product.
    ///
    /// The badge is bumped before the request goes out and reverted by the
    /// same delta if it fails.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error after rolling back.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };

        self.bump_badge(1);

        match self.api.add_item(product_id).await {
            Ok(()) => {
                self.reload().await;
                Ok(Outcome::Done(()))
            }
            Err(e) => {
                self.bump_badge(-1);
                Err(e.into())
            }
        }
    }

    /// Increment an existing line by one unit.
    ///
    /// A no-op when the line is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error after rolling back.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn increment(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };

        {
            let mut state = self.state();
            let Some(line) = state
                .snapshot
                .lines
                .iter_mut()
                .find(|line| line.product_id == product_id)
            else {
                return Ok(Outcome::Done(()));
            };
            line.quantity += 1;
            state.badge = state.badge.saturating_add(1);
            state.snapshot.total = state.snapshot.computed_total();
        }

        match self.api.add_item(product_id).await {
            Ok(()) => {
                self.reload().await;
                Ok(Outcome::Done(()))
            }
            Err(e) => {
                let mut state = self.state();
                if let Some(line) = state
                    .snapshot
                    .lines
                    .iter_mut()
                    .find(|line| line.product_id == product_id)
                {
                    line.quantity = line.quantity.saturating_sub(1).max(1);
                }
                state.badge = state.badge.saturating_sub(1);
                state.snapshot.total = state.snapshot.computed_total();
                drop(state);
                Err(e.into())
            }
        }
    }

    /// Decrement a line by one unit; at quantity 1 this removes the line.
    ///
    /// A no-op when the line is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error after rolling back.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn decrement(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };

        // Decide under the lock, await after the guard's scope ends; the
        // guard must not be captured across the delegated remove.
        let delegate = {
            let mut state = self.state();
            let Some(line) = state
                .snapshot
                .lines
                .iter_mut()
                .find(|line| line.product_id == product_id)
            else {
                return Ok(Outcome::Done(()));
            };

            if line.quantity <= 1 {
                true
            } else {
                line.quantity -= 1;
                state.badge = state.badge.saturating_sub(1);
                state.snapshot.total = state.snapshot.computed_total();
                false
            }
        };

        if delegate {
            return self.remove_inner(product_id).await;
        }

        match self.api.decrement_item(product_id).await {
            Ok(()) => {
                self.reload().await;
                Ok(Outcome::Done(()))
            }
            Err(e) => {
                let mut state = self.state();
                if let Some(line) = state
                    .snapshot
                    .lines
                    .iter_mut()
                    .find(|line| line.product_id == product_id)
                {
                    line.quantity += 1;
                }
                state.badge = state.badge.saturating_add(1);
                state.snapshot.total = state.snapshot.computed_total();
                drop(state);
                Err(e.into())
            }
        }
    }

    /// Remove a line entirely.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error after restoring the snapshot.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };
        self.remove_inner(product_id).await
    }

    /// Removal body, shared with `decrement` at quantity 1. Assumes the
    /// busy guard is held.
    async fn remove_inner(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let previous = {
            let mut state = self.state();
            let previous = state.clone();
            state
                .snapshot
                .lines
                .retain(|line| line.product_id != product_id);
            state.snapshot.total = state.snapshot.computed_total();
            state.badge = state.snapshot.item_count();
            previous
        };

        match self.api.remove_item(product_id).await {
            Ok(()) => {
                self.reload().await;
                Ok(Outcome::Done(()))
            }
            Err(e) => {
                *self.state() = previous;
                Err(e.into())
            }
        }
    }

    /// Reset the cart.
    ///
    /// With `skip_server` the reset is local only, used after checkout when
    /// the order has already emptied the server-side cart; it also bypasses
    /// the busy flag.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error after restoring the snapshot.
    #[instrument(skip(self))]
    pub async fn clear(&self, skip_server: bool) -> Result<Outcome, CartError> {
        if skip_server {
            *self.state() = CartState::default();
            return Ok(Outcome::Done(()));
        }

        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };

        let previous = {
            let mut state = self.state();
            let previous = state.clone();
            *state = CartState::default();
            previous
        };

        match self.api.clear_cart().await {
            Ok(()) => Ok(Outcome::Done(())),
            Err(e) => {
                *self.state() = previous;
                Err(e.into())
            }
        }
    }

    /// Toggle a topping on a cart line.
    ///
    /// The flag is flipped locally first and flipped back if the request
    /// fails. A no-op when the line is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error after rolling back.
    #[instrument(skip(self), fields(product_id = %product_id, addition = %addition))]
    pub async fn toggle_addition(
        &self,
        product_id: ProductId,
        addition: &str,
    ) -> Result<Outcome, CartError> {
        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };

        let flipped = {
            let mut state = self.state();
            let Some(line) = state
                .snapshot
                .lines
                .iter_mut()
                .find(|line| line.product_id == product_id)
            else {
                return Ok(Outcome::Done(()));
            };
            match line.product.additions.get_mut(addition) {
                Some(selected) => {
                    *selected = !*selected;
                    true
                }
                None => false,
            }
        };

        match self.api.toggle_addition(product_id, addition).await {
            Ok(()) => {
                self.reload().await;
                Ok(Outcome::Done(()))
            }
            Err(e) => {
                if flipped {
                    let mut state = self.state();
                    if let Some(line) = state
                        .snapshot
                        .lines
                        .iter_mut()
                        .find(|line| line.product_id == product_id)
                        && let Some(selected) = line.product.additions.get_mut(addition)
                    {
                        *selected = !*selected;
                    }
                }
                Err(e.into())
            }
        }
    }

    /// Place an order for the cart contents.
    ///
    /// Validates the address before any network call: an empty cart and a
    /// missing street or apartment each abort with their specific error.
    /// On success the cart is cleared locally without a server call (the
    /// order already emptied it); on failure the cart is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error pre-network, or the underlying API error.
    #[instrument(skip(self, address))]
    pub async fn checkout(&self, address: Address) -> Result<Outcome<OrderReceipt>, CartError> {
        let Some(_guard) = self.try_begin() else {
            return Ok(Outcome::Busy);
        };

        if self.state().snapshot.is_empty() {
            return Err(CartError::Empty);
        }
        validate_address(&address)?;

        let receipt = self.api.place_order(&address).await?;
        *self.state() = CartState::default();
        Ok(Outcome::Done(receipt))
    }
}

fn validate_address(address: &Address) -> Result<(), CartError> {
    if address.street.trim().is_empty() {
        return Err(CartError::MissingStreet);
    }
    if address
        .apartment
        .as_deref()
        .is_none_or(|apartment| apartment.trim().is_empty())
    {
        return Err(CartError::MissingApartment);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::types::{CartLine, Characteristics, Product, ProductKind};
    use rust_decimal::{Decimal, dec};
    use std::collections::{BTreeMap, VecDeque};

    fn product(id: i64, cost: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            cost,
            preview_link: None,
            kind: ProductKind::Pizza,
            ingredients: Vec::new(),
            additions: BTreeMap::from([("cheese".to_string(), false)]),
            characteristics: Characteristics::default(),
        }
    }

    fn snapshot(entries: &[(i64, u32, Decimal)]) -> CartSnapshot {
        let lines: Vec<CartLine> = entries
            .iter()
            .map(|&(id, quantity, cost)| CartLine {
                product_id: ProductId::new(id),
                quantity,
                product: product(id, cost),
            })
            .collect();
        let total = lines.iter().map(CartLine::line_total).sum();
        CartSnapshot { lines, total }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "Internal server error".to_string(),
        }
    }

    /// Scripted transport: every call pops the next queued result for its
    /// method; an empty queue answers Ok with an empty cart.
    #[derive(Default)]
    struct Scripted {
        cart: Mutex<VecDeque<Result<CartSnapshot, ApiError>>>,
        add: Mutex<VecDeque<Result<(), ApiError>>>,
        remove: Mutex<VecDeque<Result<(), ApiError>>>,
        decrement: Mutex<VecDeque<Result<(), ApiError>>>,
        toggle: Mutex<VecDeque<Result<(), ApiError>>>,
        clear: Mutex<VecDeque<Result<(), ApiError>>>,
        order: Mutex<VecDeque<Result<OrderReceipt, ApiError>>>,
    }

    impl Scripted {
        fn push_cart(&self, result: Result<CartSnapshot, ApiError>) {
            self.cart.lock().unwrap().push_back(result);
        }
    }

    fn pop(queue: &Mutex<VecDeque<Result<(), ApiError>>>) -> Result<(), ApiError> {
        queue.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    impl OrdersApi for Scripted {
        async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError> {
            self.cart
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(CartSnapshot::default()))
        }

        async fn add_item(&self, _product_id: ProductId) -> Result<(), ApiError> {
            pop(&self.add)
        }

        async fn remove_item(&self, _product_id: ProductId) -> Result<(), ApiError> {
            pop(&self.remove)
        }

        async fn decrement_item(&self, _product_id: ProductId) -> Result<(), ApiError> {
            pop(&self.decrement)
        }

        async fn toggle_addition(
            &self,
            _product_id: ProductId,
            _addition: &str,
        ) -> Result<(), ApiError> {
            pop(&self.toggle)
        }

        async fn clear_cart(&self) -> Result<(), ApiError> {
            pop(&self.clear)
        }

        async fn place_order(&self, _address: &Address) -> Result<OrderReceipt, ApiError> {
            self.order
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(server_error()))
        }
    }

    async fn loaded_store(entries: &[(i64, u32, Decimal)]) -> CartStore<Scripted> {
        let api = Scripted::default();
        api.push_cart(Ok(snapshot(entries)));
        let store = CartStore::new(api);
        store.load().await;
        store
    }

    fn valid_address() -> Address {
        Address {
            street: "Main St 1".to_string(),
            city: "Springfield".to_string(),
            apartment: Some("12".to_string()),
            ..Address::default()
        }
    }

    #[tokio::test]
    async fn test_load_sets_badge_to_quantity_sum() {
        let store = loaded_store(&[(7, 2, dec!(10)), (3, 1, dec!(5))]).await;
        assert_eq!(store.badge(), 3);
        assert_eq!(store.snapshot().total, dec!(25));
    }

    #[tokio::test]
    async fn test_load_failure_resets_to_empty() {
        let api = Scripted::default();
        api.push_cart(Err(server_error()));
        let store = CartStore::new(api);
        store.load().await;
        assert!(store.snapshot().is_empty());
        assert_eq!(store.badge(), 0);
    }

    #[tokio::test]
    async fn test_add_reconciles_badge_with_reload() {
        let store = loaded_store(&[]).await;
        store.api.push_cart(Ok(snapshot(&[(7, 1, dec!(10))])));

        let outcome = store.add(ProductId::new(7)).await.unwrap();
        assert_eq!(outcome, Outcome::Done(()));
        assert_eq!(store.badge(), 1);
        assert_eq!(store.snapshot().total, dec!(10));
    }

    #[tokio::test]
    async fn test_failed_add_reverts_badge_exactly() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        assert_eq!(store.badge(), 2);

        store.api.add.lock().unwrap().push_back(Err(server_error()));

        let result = store.add(ProductId::new(9)).await;
        assert!(matches!(result, Err(CartError::Api(_))));
        assert_eq!(store.badge(), 2);
        assert_eq!(store.snapshot().item_count(), 2);
    }

    #[tokio::test]
    async fn test_increment_absent_line_is_noop() {
        let store = loaded_store(&[(7, 1, dec!(10))]).await;
        let outcome = store.increment(ProductId::new(99)).await.unwrap();
        assert_eq!(outcome, Outcome::Done(()));
        assert_eq!(store.badge(), 1);
        assert_eq!(store.snapshot().total, dec!(10));
    }

    #[tokio::test]
    async fn test_failed_increment_restores_quantity_and_total() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store
            .api
            .add
            .lock()
            .unwrap()
            .push_back(Err(server_error()));

        let result = store.increment(ProductId::new(7)).await;
        assert!(result.is_err());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.lines.first().unwrap().quantity, 2);
        assert_eq!(snapshot.total, dec!(20));
        assert_eq!(store.badge(), 2);
    }

    #[tokio::test]
    async fn test_decrement_at_quantity_one_removes() {
        let store = loaded_store(&[(7, 1, dec!(10))]).await;
        store.api.push_cart(Ok(snapshot(&[])));

        store.decrement(ProductId::new(7)).await.unwrap();

        assert!(store.snapshot().is_empty());
        assert_eq!(store.badge(), 0);
        assert!(store.api.remove.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_decrement_delegation_is_spawnable() {
        // The quantity-1 path delegates to remove across an await; the
        // future must stay Send for the axum handlers, which tokio::spawn
        // enforces at compile time.
        let store = std::sync::Arc::new(loaded_store(&[(7, 1, dec!(10))]).await);
        store.api.push_cart(Ok(snapshot(&[])));

        let task = tokio::spawn({
            let store = std::sync::Arc::clone(&store);
            async move { store.decrement(ProductId::new(7)).await }
        });
        task.await.unwrap().unwrap();

        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_decrement_never_goes_below_one() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store.api.push_cart(Ok(snapshot(&[(7, 1, dec!(10))])));

        store.decrement(ProductId::new(7)).await.unwrap();
        assert_eq!(store.snapshot().lines.first().unwrap().quantity, 1);
        assert_eq!(store.badge(), 1);
    }

    #[tokio::test]
    async fn test_remove_empties_cart_and_zeroes_total() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        assert_eq!(store.snapshot().total, dec!(20));

        store.api.push_cart(Ok(snapshot(&[])));
        store.remove(ProductId::new(7)).await.unwrap();

        assert!(store.snapshot().is_empty());
        assert_eq!(store.snapshot().total, Decimal::ZERO);
        assert_eq!(store.badge(), 0);
    }

    #[tokio::test]
    async fn test_failed_remove_restores_snapshot() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store
            .api
            .remove
            .lock()
            .unwrap()
            .push_back(Err(server_error()));

        let result = store.remove(ProductId::new(7)).await;
        assert!(result.is_err());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(snapshot.total, dec!(20));
        assert_eq!(store.badge(), 2);
    }

    #[tokio::test]
    async fn test_clear_skip_server_makes_no_network_call() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store
            .api
            .clear
            .lock()
            .unwrap()
            .push_back(Err(server_error()));

        store.clear(true).await.unwrap();

        assert!(store.snapshot().is_empty());
        assert_eq!(store.badge(), 0);
        // The scripted failure was never consumed.
        assert_eq!(store.api.clear.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_clear_restores_snapshot() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store
            .api
            .clear
            .lock()
            .unwrap()
            .push_back(Err(server_error()));

        let result = store.clear(false).await;
        assert!(result.is_err());
        assert_eq!(store.snapshot().item_count(), 2);
    }

    #[tokio::test]
    async fn test_toggle_addition_reverts_on_failure() {
        let store = loaded_store(&[(7, 1, dec!(10))]).await;
        store
            .api
            .toggle
            .lock()
            .unwrap()
            .push_back(Err(server_error()));

        let result = store.toggle_addition(ProductId::new(7), "cheese").await;
        assert!(result.is_err());

        let snapshot = store.snapshot();
        let line = snapshot.lines.first().unwrap();
        assert_eq!(line.product.additions.get("cheese"), Some(&false));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_rejected() {
        let store = loaded_store(&[]).await;
        let result = store.checkout(valid_address()).await;
        assert!(matches!(result, Err(CartError::Empty)));
    }

    #[tokio::test]
    async fn test_checkout_missing_street_aborts_pre_network() {
        let store = loaded_store(&[(7, 1, dec!(10))]).await;
        let address = Address {
            street: "  ".to_string(),
            ..valid_address()
        };

        let result = store.checkout(address).await;
        assert!(matches!(result, Err(CartError::MissingStreet)));
        // The order queue is empty, so a network call would have failed;
        // the cart being intact shows validation aborted first.
        assert_eq!(store.snapshot().item_count(), 1);
    }

    #[tokio::test]
    async fn test_checkout_missing_apartment_aborts_pre_network() {
        let store = loaded_store(&[(7, 1, dec!(10))]).await;
        let address = Address {
            apartment: None,
            ..valid_address()
        };

        let result = store.checkout(address).await;
        assert!(matches!(result, Err(CartError::MissingApartment)));
    }

    #[tokio::test]
    async fn test_checkout_success_clears_locally() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store.api.order.lock().unwrap().push_back(Ok(OrderReceipt {
            order_id: ovenside_core::OrderId::new(42),
            order_time: "2026-08-28T10:00:00".to_string(),
            payment_sum: dec!(20),
            payment_currency: "LTC".to_string(),
            paid: true,
        }));

        let outcome = store.checkout(valid_address()).await.unwrap();
        let Outcome::Done(receipt) = outcome else {
            panic!("expected placed order");
        };
        assert_eq!(receipt.payment_sum, dec!(20));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.badge(), 0);
        // No clear_cart call went out; the order already emptied it.
        assert!(store.api.clear.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_checkout_leaves_cart_untouched() {
        let store = loaded_store(&[(7, 2, dec!(10))]).await;
        store
            .api
            .order
            .lock()
            .unwrap()
            .push_back(Err(server_error()));

        let result = store.checkout(valid_address()).await;
        assert!(matches!(result, Err(CartError::Api(_))));
        assert_eq!(store.snapshot().item_count(), 2);
        assert_eq!(store.snapshot().total, dec!(20));
    }

    #[tokio::test]
    async fn test_busy_flag_released_after_operation() {
        let store = loaded_store(&[(7, 1, dec!(10))]).await;
        store.api.push_cart(Ok(snapshot(&[(7, 2, dec!(10))])));
        store.add(ProductId::new(7)).await.unwrap();

        // A subsequent operation is not reported busy.
        store.api.push_cart(Ok(snapshot(&[(7, 2, dec!(10))])));
        let outcome = store.load().await;
        assert_eq!(outcome, Outcome::Done(()));
    }
}
