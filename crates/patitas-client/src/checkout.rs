//! # Checkout Flow
//!
//! Turns the current cart into an order. The order is created from a
//! snapshot of the cart taken at the start of the flow; once the orders
//! service has accepted it, the cart is cleared. A failed clear is
//! logged and swallowed, because the purchase itself already went
//! through.

use crate::sync::SyncedCart;
use patitas_core::{BoxedIdentityResolver, BoxedOrderApi, Order, OrderItem, StoreError, StoreResult};
use tracing::{info, instrument, warn};

/// Places orders from the cart through the orders service
#[derive(Clone)]
pub struct CheckoutFlow {
    orders: BoxedOrderApi,
    identity: BoxedIdentityResolver,
}

impl CheckoutFlow {
    /// Create a checkout flow over the given orders client and identity
    pub fn new(orders: BoxedOrderApi, identity: BoxedIdentityResolver) -> Self {
        Self { orders, identity }
    }

    /// Place an order for everything in the cart.
    ///
    /// Fails with [`StoreError::EmptyCart`] before any network call
    /// when no user is signed in or the cart holds no lines. If the
    /// orders service rejects the order, the cart is left untouched.
    /// The returned order always carries its line items, even when the
    /// service answers with the bare order record.
    #[instrument(skip(self, cart))]
    pub async fn place_order(&self, cart: &SyncedCart) -> StoreResult<Order> {
        let Some(user_id) = self.identity.current_user_id() else {
            return Err(StoreError::EmptyCart);
        };
        let (items, total) = cart.snapshot();
        if items.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let order_items: Vec<OrderItem> = items.iter().map(OrderItem::from_cart_item).collect();
        let mut order = self.orders.create_order(user_id, total, &order_items).await?;

        if let Err(e) = cart.clear().await {
            warn!("Order placed but cart clear failed: {e}");
        }
        if order.is_empty() {
            order.items = order_items;
        }
        info!(order_id = ?order.id, total, "Order placed");
        Ok(order)
    }
}
