//! # Catalog Service Client
//!
//! Product listings and search, plus the admin CRUD endpoints. Admin
//! calls carry the acting admin's email, which the service checks
//! server-side.

use crate::gateway::ApiGateway;
use patitas_core::{Product, ProductDraft, StoreResult};
use serde::Serialize;

/// Client for the product catalog microservice
#[derive(Clone)]
pub struct CatalogService {
    gateway: ApiGateway,
    base: String,
}

impl CatalogService {
    /// Create a client rooted at the catalog base URL
    pub fn new(gateway: ApiGateway, base: impl Into<String>) -> Self {
        Self {
            gateway,
            base: base.into(),
        }
    }

    /// Every product in the catalog
    pub async fn all(&self) -> StoreResult<Vec<Product>> {
        self.gateway.get(&self.base).await
    }

    /// One product by id
    pub async fn by_id(&self, id: i64) -> StoreResult<Product> {
        self.gateway.get(&format!("{}/{id}", self.base)).await
    }

    /// URL of a product's image endpoint, for direct rendering
    pub fn image_url(&self, id: i64) -> String {
        format!("{}/{id}/imagen", self.base)
    }

    /// Products whose name matches the given text
    pub async fn search_by_name(&self, name: &str) -> StoreResult<Vec<Product>> {
        self.gateway
            .get_query(&format!("{}/buscar", self.base), &[("nombre", name)])
            .await
    }

    /// Products in one category
    pub async fn by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        self.gateway
            .get(&format!("{}/categoria/{category}", self.base))
            .await
    }

    /// Create a product (admin)
    pub async fn create(&self, draft: &ProductDraft, admin_email: &str) -> StoreResult<Product> {
        let request = AdminProductRequest { draft, admin_email };
        self.gateway.post(&self.base, &request).await
    }

    /// Update a product (admin)
    pub async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
        admin_email: &str,
    ) -> StoreResult<Product> {
        let request = AdminProductRequest { draft, admin_email };
        self.gateway
            .put(&format!("{}/{id}", self.base), &request)
            .await
    }

    /// Delete a product (admin)
    pub async fn delete(&self, id: i64, admin_email: &str) -> StoreResult<()> {
        self.gateway
            .delete_query(&format!("{}/{id}", self.base), &[("emailAdmin", admin_email)])
            .await
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Draft fields plus the acting admin, flattened into one body
#[derive(Debug, Serialize)]
struct AdminProductRequest<'a> {
    #[serde(flatten)]
    draft: &'a ProductDraft,
    #[serde(rename = "emailAdmin")]
    admin_email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use patitas_core::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service(server: &MockServer) -> CatalogService {
        let gateway = ApiGateway::new(Arc::new(MemoryStorage::new()));
        CatalogService::new(gateway, format!("{}/productos", server.uri()))
    }

    #[tokio::test]
    async fn test_search_sends_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/productos/buscar"))
            .and(query_param("nombre", "collar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 12, "nombre": "Collar reflectante", "precio": 4990.0}
            ])))
            .mount(&server)
            .await;

        let products = service(&server).await.search_by_name("collar").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 12);
    }

    #[tokio::test]
    async fn test_create_flattens_admin_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/productos"))
            .and(body_json(json!({
                "nombre": "Arena sanitaria",
                "descripcion": "Bolsa 10 kg",
                "precio": 6990.0,
                "categoria": "higiene",
                "emailAdmin": "admin@patitas.cl"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 20, "nombre": "Arena sanitaria", "descripcion": "Bolsa 10 kg",
                "precio": 6990.0, "categoria": "higiene"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let draft = ProductDraft::new("Arena sanitaria", 6990.0)
            .with_description("Bolsa 10 kg")
            .with_category("higiene");

        let product = service(&server)
            .await
            .create(&draft, "admin@patitas.cl")
            .await
            .unwrap();
        assert_eq!(product.id, 20);
    }

    #[tokio::test]
    async fn test_delete_carries_admin_query() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/productos/20"))
            .and(query_param("emailAdmin", "admin@patitas.cl"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        service(&server)
            .await
            .delete(20, "admin@patitas.cl")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_image_url_is_static() {
        let server = MockServer::start().await;
        let catalog = service(&server).await;
        assert_eq!(
            catalog.image_url(12),
            format!("{}/productos/12/imagen", server.uri())
        );
    }
}
