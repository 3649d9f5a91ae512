//! # Remote Service Traits
//!
//! Seams between the cart/checkout logic and the microservices that back
//! them. The client crate provides HTTP implementations; tests substitute
//! in-memory fakes.

use crate::cart::CartItem;
use crate::error::StoreResult;
use crate::order::{Order, OrderItem};
use async_trait::async_trait;
use std::sync::Arc;

/// Operations the remote cart service offers.
///
/// The remote cart is authoritative: after any mutation the caller is
/// expected to re-fetch `items_for_user` rather than trust the mutation's
/// own response payload.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// All line items currently in the user's cart
    async fn items_for_user(&self, user_id: i64) -> StoreResult<Vec<CartItem>>;

    /// Add a product to the user's cart. The service merges an existing
    /// line for the same product instead of duplicating it.
    async fn add_item(&self, user_id: i64, product_id: i64, quantity: u32)
        -> StoreResult<CartItem>;

    /// Set the absolute quantity of one line item
    async fn set_quantity(&self, item_id: i64, quantity: u32) -> StoreResult<CartItem>;

    /// Delete one line item
    async fn delete_item(&self, item_id: i64) -> StoreResult<()>;

    /// Delete every line item the user has
    async fn clear_user(&self, user_id: i64) -> StoreResult<()>;
}

/// Type alias for a shared cart service handle (dynamic dispatch)
pub type BoxedCartApi = Arc<dyn CartApi>;

/// Operations the remote order service offers
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Create an order from a cart snapshot. The service may answer with
    /// the bare order record, without echoing the line items.
    async fn create_order(
        &self,
        user_id: i64,
        total: f64,
        items: &[OrderItem],
    ) -> StoreResult<Order>;
}

/// Type alias for a shared order service handle (dynamic dispatch)
pub type BoxedOrderApi = Arc<dyn OrderApi>;
