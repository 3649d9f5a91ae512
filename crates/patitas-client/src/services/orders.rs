//! # Order Service Client
//!
//! Order creation and history. The checkout flow drives creation through
//! the `OrderApi` trait.

use crate::gateway::ApiGateway;
use async_trait::async_trait;
use patitas_core::{Order, OrderApi, OrderItem, OrderSummary, StoreResult};
use serde::Serialize;

/// Client for the order microservice
#[derive(Clone)]
pub struct OrderService {
    gateway: ApiGateway,
    base: String,
}

impl OrderService {
    /// Create a client rooted at the orders base URL
    pub fn new(gateway: ApiGateway, base: impl Into<String>) -> Self {
        Self {
            gateway,
            base: base.into(),
        }
    }

    /// Create an order from a cart snapshot. The service answers with the
    /// bare order record; line items are not echoed back.
    pub async fn create_order(
        &self,
        user_id: i64,
        total: f64,
        items: &[OrderItem],
    ) -> StoreResult<Order> {
        let request = CreateOrderRequest {
            user_id,
            total,
            items,
        };
        self.gateway.post(&self.base, &request).await
    }

    /// All orders placed by one user
    pub async fn for_user(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        self.gateway
            .get(&format!("{}/usuario/{user_id}", self.base))
            .await
    }

    /// Line items of one order
    pub async fn items_of(&self, order_id: i64) -> StoreResult<Vec<OrderItem>> {
        self.gateway
            .get(&format!("{}/{order_id}/items", self.base))
            .await
    }

    /// One order by id
    pub async fn by_id(&self, order_id: i64) -> StoreResult<Order> {
        self.gateway.get(&format!("{}/{order_id}", self.base)).await
    }

    /// Aggregate view: order, items and item count
    pub async fn details(&self, order_id: i64) -> StoreResult<OrderSummary> {
        self.gateway
            .get(&format!("{}/{order_id}/detalles", self.base))
            .await
    }

    /// Every order in the system (admin view)
    pub async fn all(&self) -> StoreResult<Vec<Order>> {
        self.gateway.get(&self.base).await
    }

    /// Cancel one order; answers with the updated record
    pub async fn cancel(&self, order_id: i64) -> StoreResult<Order> {
        self.gateway
            .put_empty(&format!("{}/{order_id}/cancelar", self.base))
            .await
    }
}

#[async_trait]
impl OrderApi for OrderService {
    async fn create_order(
        &self,
        user_id: i64,
        total: f64,
        items: &[OrderItem],
    ) -> StoreResult<Order> {
        OrderService::create_order(self, user_id, total, items).await
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    #[serde(rename = "usuarioId")]
    user_id: i64,
    total: f64,
    items: &'a [OrderItem],
}
