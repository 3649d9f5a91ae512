//! # Synchronized Cart
//!
//! The cart service owns the cart; this module keeps a local mirror of
//! it. Every mutation goes to the service first and, on success, the
//! whole cart is reloaded so the mirror reflects whatever the service
//! decided, including merges and server-side pricing.
//!
//! Reads (`items`, `total`, `item_count`) never touch the network; they
//! answer from the mirror. A transport failure during a mutation leaves
//! the mirror exactly as it was.

use patitas_core::{cart_total, BoxedCartApi, BoxedIdentityResolver, CartItem, StoreResult};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// How a cart operation resolved, transport errors aside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The mutation reached the service and the mirror was reloaded
    Synced,
    /// No user is signed in; nothing was sent
    Unauthenticated,
    /// The targeted line is no longer in the mirror; nothing was sent
    StaleItem,
}

impl SyncOutcome {
    /// Whether the operation reached the service
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced)
    }
}

#[derive(Debug, Default)]
struct CartState {
    items: Vec<CartItem>,
    total: f64,
    syncing: bool,
}

/// Server-authoritative cart with a locally readable mirror
#[derive(Clone)]
pub struct SyncedCart {
    remote: BoxedCartApi,
    identity: BoxedIdentityResolver,
    state: Arc<Mutex<CartState>>,
}

impl SyncedCart {
    /// Create an empty cart bound to a cart service and an identity
    pub fn new(remote: BoxedCartApi, identity: BoxedIdentityResolver) -> Self {
        Self {
            remote,
            identity,
            state: Arc::new(Mutex::new(CartState::default())),
        }
    }

    /// Replace the mirror with the service's view of the cart
    #[instrument(skip(self))]
    pub async fn reload(&self) -> StoreResult<SyncOutcome> {
        let Some(user_id) = self.identity.current_user_id() else {
            debug!("Skipping cart reload without a session");
            return Ok(SyncOutcome::Unauthenticated);
        };
        let _guard = SyncGuard::raise(&self.state);
        self.refresh(user_id).await?;
        Ok(SyncOutcome::Synced)
    }

    /// Add one unit of a product. The service merges repeated products
    /// into a single line.
    #[instrument(skip(self))]
    pub async fn add(&self, product_id: i64) -> StoreResult<SyncOutcome> {
        let Some(user_id) = self.identity.current_user_id() else {
            info!("Rejecting cart add without a session");
            return Ok(SyncOutcome::Unauthenticated);
        };
        let _guard = SyncGuard::raise(&self.state);
        self.remote.add_item(user_id, product_id, 1).await?;
        self.refresh(user_id).await?;
        Ok(SyncOutcome::Synced)
    }

    /// Raise a line's quantity by one
    #[instrument(skip(self))]
    pub async fn increment(&self, item_id: i64) -> StoreResult<SyncOutcome> {
        let Some(quantity) = self.find(item_id).map(|item| item.quantity) else {
            debug!("Ignoring increment for a line not in the cart");
            return Ok(SyncOutcome::StaleItem);
        };
        let Some(user_id) = self.identity.current_user_id() else {
            return Ok(SyncOutcome::Unauthenticated);
        };
        let _guard = SyncGuard::raise(&self.state);
        self.remote.set_quantity(item_id, quantity + 1).await?;
        self.refresh(user_id).await?;
        Ok(SyncOutcome::Synced)
    }

    /// Lower a line's quantity by one; at one, the line is removed
    #[instrument(skip(self))]
    pub async fn decrement(&self, item_id: i64) -> StoreResult<SyncOutcome> {
        let Some(quantity) = self.find(item_id).map(|item| item.quantity) else {
            debug!("Ignoring decrement for a line not in the cart");
            return Ok(SyncOutcome::StaleItem);
        };
        if quantity <= 1 {
            return self.remove(item_id).await;
        }
        let Some(user_id) = self.identity.current_user_id() else {
            return Ok(SyncOutcome::Unauthenticated);
        };
        let _guard = SyncGuard::raise(&self.state);
        self.remote.set_quantity(item_id, quantity - 1).await?;
        self.refresh(user_id).await?;
        Ok(SyncOutcome::Synced)
    }

    /// Delete a line outright
    #[instrument(skip(self))]
    pub async fn remove(&self, item_id: i64) -> StoreResult<SyncOutcome> {
        let Some(user_id) = self.identity.current_user_id() else {
            return Ok(SyncOutcome::Unauthenticated);
        };
        let _guard = SyncGuard::raise(&self.state);
        self.remote.delete_item(item_id).await?;
        self.refresh(user_id).await?;
        Ok(SyncOutcome::Synced)
    }

    /// Empty the cart. On success the mirror is reset directly, with no
    /// reload round-trip.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> StoreResult<SyncOutcome> {
        let Some(user_id) = self.identity.current_user_id() else {
            debug!("Skipping cart clear without a session");
            return Ok(SyncOutcome::Unauthenticated);
        };
        let _guard = SyncGuard::raise(&self.state);
        self.remote.clear_user(user_id).await?;
        let mut state = self.state();
        state.items.clear();
        state.total = 0.0;
        Ok(SyncOutcome::Synced)
    }

    /// Current lines in the mirror
    pub fn items(&self) -> Vec<CartItem> {
        self.state().items.clone()
    }

    /// Current total in the mirror
    pub fn total(&self) -> f64 {
        self.state().total
    }

    /// One line by id, if still present
    pub fn find(&self, item_id: i64) -> Option<CartItem> {
        self.state().items.iter().find(|i| i.id == item_id).cloned()
    }

    /// Whether the mirror holds no lines
    pub fn is_empty(&self) -> bool {
        self.state().items.is_empty()
    }

    /// Units across all lines
    pub fn item_count(&self) -> u32 {
        self.state().items.iter().map(|i| i.quantity).sum()
    }

    /// Whether a mutation or reload is in flight
    pub fn is_syncing(&self) -> bool {
        self.state().syncing
    }

    /// Lines and total read under a single lock
    pub fn snapshot(&self) -> (Vec<CartItem>, f64) {
        let state = self.state();
        (state.items.clone(), state.total)
    }

    /// Pull the cart from the service into the mirror. The mirror is
    /// only written once the fetch has succeeded.
    async fn refresh(&self, user_id: i64) -> StoreResult<()> {
        let items = self.remote.items_for_user(user_id).await?;
        let mut state = self.state();
        state.total = cart_total(&items);
        state.items = items;
        Ok(())
    }

    fn state(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().expect("cart state lock poisoned")
    }
}

/// Raises the syncing flag for the span of an operation and clears it
/// on drop, error paths included. The lock itself is never held across
/// an await.
struct SyncGuard<'a> {
    state: &'a Mutex<CartState>,
}

impl<'a> SyncGuard<'a> {
    fn raise(state: &'a Mutex<CartState>) -> Self {
        state.lock().expect("cart state lock poisoned").syncing = true;
        Self { state }
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().expect("cart state lock poisoned").syncing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use patitas_core::{CartApi, FixedIdentity, StoreError};
    use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

    /// In-memory stand-in for the cart service. Prices are derived from
    /// the product id so totals are predictable: product 10 costs 1000.
    struct FakeCartRemote {
        items: Mutex<Vec<CartItem>>,
        next_id: AtomicI64,
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl FakeCartRemote {
        fn new() -> Self {
            Self {
                items: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
                calls: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        fn price_of(product_id: i64) -> f64 {
            product_id as f64 * 100.0
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn set_failing(&self, failing: bool) {
            self.fail.store(failing, Ordering::SeqCst);
        }

        fn record_call(&self) -> StoreResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                Err(StoreError::Network("connection reset".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl CartApi for FakeCartRemote {
        async fn items_for_user(&self, user_id: i64) -> StoreResult<Vec<CartItem>> {
            self.record_call()?;
            let items = self.items.lock().unwrap();
            Ok(items.iter().filter(|i| i.user_id == user_id).cloned().collect())
        }

        async fn add_item(
            &self,
            user_id: i64,
            product_id: i64,
            quantity: u32,
        ) -> StoreResult<CartItem> {
            self.record_call()?;
            let mut items = self.items.lock().unwrap();
            if let Some(line) = items
                .iter_mut()
                .find(|i| i.user_id == user_id && i.product_id == product_id)
            {
                line.quantity += quantity;
                return Ok(line.clone());
            }
            let line = CartItem {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                user_id,
                product_id,
                product_name: format!("Producto {product_id}"),
                product_price: Self::price_of(product_id),
                quantity,
                image_url: None,
            };
            items.push(line.clone());
            Ok(line)
        }

        async fn set_quantity(&self, item_id: i64, quantity: u32) -> StoreResult<CartItem> {
            self.record_call()?;
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|i| i.id == item_id) {
                Some(line) => {
                    line.quantity = quantity;
                    Ok(line.clone())
                }
                None => Err(StoreError::Http {
                    status: 404,
                    message: "Item no encontrado.".into(),
                }),
            }
        }

        async fn delete_item(&self, item_id: i64) -> StoreResult<()> {
            self.record_call()?;
            let mut items = self.items.lock().unwrap();
            match items.iter().position(|i| i.id == item_id) {
                Some(pos) => {
                    items.remove(pos);
                    Ok(())
                }
                None => Err(StoreError::Http {
                    status: 404,
                    message: "Item no encontrado.".into(),
                }),
            }
        }

        async fn clear_user(&self, user_id: i64) -> StoreResult<()> {
            self.record_call()?;
            self.items.lock().unwrap().retain(|i| i.user_id != user_id);
            Ok(())
        }
    }

    fn cart_for_user(user_id: i64) -> (SyncedCart, Arc<FakeCartRemote>) {
        let remote = Arc::new(FakeCartRemote::new());
        let cart = SyncedCart::new(remote.clone(), Arc::new(FixedIdentity::user(user_id)));
        (cart, remote)
    }

    #[tokio::test]
    async fn test_reload_mirrors_server_state() {
        let (cart, remote) = cart_for_user(7);
        remote.add_item(7, 10, 2).await.unwrap();
        remote.add_item(7, 5, 1).await.unwrap();

        let outcome = cart.reload().await.unwrap();
        assert!(outcome.is_synced());
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total(), 2500.0);
        assert_eq!(cart.item_count(), 3);
    }

    #[tokio::test]
    async fn test_total_always_matches_lines() {
        let (cart, _) = cart_for_user(7);
        cart.add(10).await.unwrap();
        cart.add(5).await.unwrap();
        cart.add(10).await.unwrap();

        let (items, total) = cart.snapshot();
        let expected: f64 = items.iter().map(|i| i.line_total()).sum();
        assert_eq!(total, expected);
        assert_eq!(total, 2500.0);
    }

    #[tokio::test]
    async fn test_add_without_session_sends_nothing() {
        let remote = Arc::new(FakeCartRemote::new());
        let cart = SyncedCart::new(remote.clone(), Arc::new(FixedIdentity::anonymous()));

        let outcome = cart.add(10).await.unwrap();
        assert_eq!(outcome, SyncOutcome::Unauthenticated);
        assert_eq!(remote.calls(), 0);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_add_reloads_after_mutation() {
        let (cart, remote) = cart_for_user(7);

        let outcome = cart.add(10).await.unwrap();
        assert_eq!(outcome, SyncOutcome::Synced);
        // One call to add, one to reload the mirror
        assert_eq!(remote.calls(), 2);
        assert_eq!(cart.total(), 1000.0);
    }

    #[tokio::test]
    async fn test_repeated_add_merges_into_one_line() {
        let (cart, _) = cart_for_user(7);
        cart.add(10).await.unwrap();
        cart.add(10).await.unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart.total(), 2000.0);
    }

    #[tokio::test]
    async fn test_increment_raises_quantity() {
        let (cart, _) = cart_for_user(7);
        cart.add(10).await.unwrap();
        let item_id = cart.items()[0].id;

        let outcome = cart.increment(item_id).await.unwrap();
        assert!(outcome.is_synced());
        assert_eq!(cart.find(item_id).unwrap().quantity, 2);
        assert_eq!(cart.total(), 2000.0);
    }

    #[tokio::test]
    async fn test_decrement_above_one_lowers_quantity() {
        let (cart, _) = cart_for_user(7);
        cart.add(10).await.unwrap();
        let item_id = cart.items()[0].id;
        cart.increment(item_id).await.unwrap();

        cart.decrement(item_id).await.unwrap();
        assert_eq!(cart.find(item_id).unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn test_decrement_at_one_removes_the_line() {
        let (cart, remote) = cart_for_user(7);
        cart.add(10).await.unwrap();
        let item_id = cart.items()[0].id;

        let outcome = cart.decrement(item_id).await.unwrap();
        assert!(outcome.is_synced());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert!(remote.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stale_line_is_a_local_no_op() {
        let (cart, remote) = cart_for_user(7);
        cart.add(10).await.unwrap();
        let before = cart.snapshot();
        let calls_before = remote.calls();

        let outcome = cart.increment(99_999).await.unwrap();
        assert_eq!(outcome, SyncOutcome::StaleItem);
        assert_eq!(remote.calls(), calls_before);
        assert_eq!(cart.snapshot(), before);

        let outcome = cart.decrement(99_999).await.unwrap();
        assert_eq!(outcome, SyncOutcome::StaleItem);
        assert_eq!(remote.calls(), calls_before);
    }

    #[tokio::test]
    async fn test_clear_resets_mirror_without_reload() {
        let (cart, remote) = cart_for_user(7);
        cart.add(10).await.unwrap();
        cart.add(5).await.unwrap();
        let calls_before = remote.calls();

        let outcome = cart.clear().await.unwrap();
        assert!(outcome.is_synced());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        // Just the clear call, no trailing reload
        assert_eq!(remote.calls(), calls_before + 1);
    }

    #[tokio::test]
    async fn test_clear_twice_stays_empty() {
        let (cart, _) = cart_for_user(7);
        cart.add(10).await.unwrap();

        cart.clear().await.unwrap();
        let outcome = cart.clear().await.unwrap();
        assert!(outcome.is_synced());
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_prior_mirror() {
        let (cart, remote) = cart_for_user(7);
        cart.add(10).await.unwrap();
        let before = cart.snapshot();

        remote.set_failing(true);
        let item_id = before.0[0].id;
        let err = cart.increment(item_id).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(cart.snapshot(), before);
        assert!(!cart.is_syncing());
    }

    #[tokio::test]
    async fn test_syncing_flag_clears_after_success_and_failure() {
        let (cart, remote) = cart_for_user(7);

        cart.add(10).await.unwrap();
        assert!(!cart.is_syncing());

        remote.set_failing(true);
        assert!(cart.add(5).await.is_err());
        assert!(!cart.is_syncing());
    }
}
