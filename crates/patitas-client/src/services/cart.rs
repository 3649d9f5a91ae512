//! # Cart Service Client
//!
//! The remote, authoritative cart. The synchronizer drives this through
//! the `CartApi` trait; the summary/total endpoints are available for
//! direct reads.

use crate::gateway::ApiGateway;
use async_trait::async_trait;
use patitas_core::{CartApi, CartItem, CartSummary, StoreResult};
use serde::{Deserialize, Serialize};

/// Client for the cart microservice
#[derive(Clone)]
pub struct CartService {
    gateway: ApiGateway,
    base: String,
}

impl CartService {
    /// Create a client rooted at the cart base URL
    pub fn new(gateway: ApiGateway, base: impl Into<String>) -> Self {
        Self {
            gateway,
            base: base.into(),
        }
    }

    /// All line items currently in the user's cart
    pub async fn items_for_user(&self, user_id: i64) -> StoreResult<Vec<CartItem>> {
        self.gateway
            .get(&format!("{}/usuario/{user_id}", self.base))
            .await
    }

    /// Aggregate view: user record, items, total and item count
    pub async fn details_for_user(&self, user_id: i64) -> StoreResult<CartSummary> {
        self.gateway
            .get(&format!("{}/usuario/{user_id}/detalles", self.base))
            .await
    }

    /// Server-computed cart total
    pub async fn total_for_user(&self, user_id: i64) -> StoreResult<f64> {
        let response: CartTotalResponse = self
            .gateway
            .get(&format!("{}/usuario/{user_id}/total", self.base))
            .await?;
        Ok(response.total)
    }

    /// Add a product to the user's cart; the server merges an existing
    /// line for the same product instead of duplicating it
    pub async fn add_item(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: u32,
    ) -> StoreResult<CartItem> {
        let request = AddItemRequest {
            user_id,
            product_id,
            quantity,
        };
        self.gateway
            .post(&format!("{}/agregar", self.base), &request)
            .await
    }

    /// Set the absolute quantity of one line item
    pub async fn set_quantity(&self, item_id: i64, quantity: u32) -> StoreResult<CartItem> {
        let request = UpdateQuantityRequest { quantity };
        self.gateway
            .put(&format!("{}/item/{item_id}", self.base), &request)
            .await
    }

    /// Delete one line item
    pub async fn delete_item(&self, item_id: i64) -> StoreResult<()> {
        self.gateway
            .delete(&format!("{}/item/{item_id}", self.base))
            .await
    }

    /// Delete every line item the user has
    pub async fn clear_user(&self, user_id: i64) -> StoreResult<()> {
        self.gateway
            .delete(&format!("{}/usuario/{user_id}", self.base))
            .await
    }
}

#[async_trait]
impl CartApi for CartService {
    async fn items_for_user(&self, user_id: i64) -> StoreResult<Vec<CartItem>> {
        CartService::items_for_user(self, user_id).await
    }

    async fn add_item(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: u32,
    ) -> StoreResult<CartItem> {
        CartService::add_item(self, user_id, product_id, quantity).await
    }

    async fn set_quantity(&self, item_id: i64, quantity: u32) -> StoreResult<CartItem> {
        CartService::set_quantity(self, item_id, quantity).await
    }

    async fn delete_item(&self, item_id: i64) -> StoreResult<()> {
        CartService::delete_item(self, item_id).await
    }

    async fn clear_user(&self, user_id: i64) -> StoreResult<()> {
        CartService::clear_user(self, user_id).await
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct AddItemRequest {
    #[serde(rename = "usuarioId")]
    user_id: i64,
    #[serde(rename = "productoId")]
    product_id: i64,
    #[serde(rename = "cantidad")]
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct UpdateQuantityRequest {
    #[serde(rename = "cantidad")]
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct CartTotalResponse {
    total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use patitas_core::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item_json(id: i64, quantity: u32) -> serde_json::Value {
        json!({
            "id": id,
            "usuarioId": 7,
            "productoId": 12,
            "productoNombre": "Collar reflectante",
            "productoPrecio": 4990.0,
            "cantidad": quantity,
            "imageUrl": null
        })
    }

    async fn service(server: &MockServer) -> CartService {
        let gateway = ApiGateway::new(Arc::new(MemoryStorage::new()));
        CartService::new(gateway, format!("{}/carrito", server.uri()))
    }

    #[tokio::test]
    async fn test_add_item_wire_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/carrito/agregar"))
            .and(body_json(json!({"usuarioId": 7, "productoId": 12, "cantidad": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(31, 1)))
            .expect(1)
            .mount(&server)
            .await;

        let item = service(&server).await.add_item(7, 12, 1).await.unwrap();
        assert_eq!(item.id, 31);
        assert_eq!(item.quantity, 1);
    }

    #[tokio::test]
    async fn test_set_quantity_put_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/carrito/item/31"))
            .and(body_json(json!({"cantidad": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(31, 3)))
            .mount(&server)
            .await;

        let item = service(&server).await.set_quantity(31, 3).await.unwrap();
        assert_eq!(item.quantity, 3);
    }

    #[tokio::test]
    async fn test_list_and_clear_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/carrito/usuario/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([item_json(31, 2)])),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/carrito/usuario/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let cart = service(&server).await;
        let items = cart.items_for_user(7).await.unwrap();
        assert_eq!(items.len(), 1);
        cart.clear_user(7).await.unwrap();
    }

    #[tokio::test]
    async fn test_total_endpoint_unwraps_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/carrito/usuario/7/total"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 9980.0})))
            .mount(&server)
            .await;

        let total = service(&server).await.total_for_user(7).await.unwrap();
        assert_eq!(total, 9980.0);
    }
}
