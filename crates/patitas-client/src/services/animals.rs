//! # Animals Service Client
//!
//! Adoptable animal listings. Mirrors the catalog client, with the
//! extra availability views and the admin endpoint that marks an
//! animal as adopted.

use crate::gateway::ApiGateway;
use patitas_core::{Animal, AnimalDraft, StoreResult};
use serde::Serialize;

/// Client for the animals microservice
#[derive(Clone)]
pub struct AnimalService {
    gateway: ApiGateway,
    base: String,
}

impl AnimalService {
    /// Create a client rooted at the animals base URL
    pub fn new(gateway: ApiGateway, base: impl Into<String>) -> Self {
        Self {
            gateway,
            base: base.into(),
        }
    }

    /// Every animal, adopted or not
    pub async fn all(&self) -> StoreResult<Vec<Animal>> {
        self.gateway.get(&self.base).await
    }

    /// Animals still waiting for a home
    pub async fn available(&self) -> StoreResult<Vec<Animal>> {
        self.gateway.get(&format!("{}/disponibles", self.base)).await
    }

    /// One animal by id
    pub async fn by_id(&self, id: i64) -> StoreResult<Animal> {
        self.gateway.get(&format!("{}/{id}", self.base)).await
    }

    /// URL of an animal's photo endpoint
    pub fn image_url(&self, id: i64) -> String {
        format!("{}/{id}/imagen", self.base)
    }

    /// Animals whose name matches the given text
    pub async fn search_by_name(&self, name: &str) -> StoreResult<Vec<Animal>> {
        self.gateway
            .get_query(&format!("{}/buscar", self.base), &[("nombre", name)])
            .await
    }

    /// Animals of one species
    pub async fn by_species(&self, species: &str) -> StoreResult<Vec<Animal>> {
        self.gateway
            .get(&format!("{}/especie/{species}", self.base))
            .await
    }

    /// Register an animal (admin)
    pub async fn create(&self, draft: &AnimalDraft, admin_email: &str) -> StoreResult<Animal> {
        let request = AdminAnimalRequest { draft, admin_email };
        self.gateway.post(&self.base, &request).await
    }

    /// Update an animal's record (admin)
    pub async fn update(
        &self,
        id: i64,
        draft: &AnimalDraft,
        admin_email: &str,
    ) -> StoreResult<Animal> {
        let request = AdminAnimalRequest { draft, admin_email };
        self.gateway
            .put(&format!("{}/{id}", self.base), &request)
            .await
    }

    /// Mark an animal as adopted (admin)
    pub async fn mark_adopted(&self, id: i64, admin_email: &str) -> StoreResult<()> {
        self.gateway
            .put_empty_query(
                &format!("{}/{id}/adoptar", self.base),
                &[("emailAdmin", admin_email)],
            )
            .await
    }

    /// Remove an animal's record (admin)
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
struct AdminAnimalRequest<'a> {
    #[serde(flatten)]
    draft: &'a AnimalDraft,
    #[serde(rename = "emailAdmin")]
    admin_email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use patitas_core::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service(server: &MockServer) -> AnimalService {
        let gateway = ApiGateway::new(Arc::new(MemoryStorage::new()));
        AnimalService::new(gateway, format!("{}/animales", server.uri()))
    }

    #[tokio::test]
    async fn test_available_hits_disponibles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/animales/disponibles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "nombre": "Luna", "especie": "gato", "raza": "mestizo",
                 "edad": "2 años", "descripcion": "Tranquila", "isAdoptado": false}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let animals = service(&server).await.available().await.unwrap();
        assert_eq!(animals.len(), 1);
        assert!(animals[0].is_available());
    }

    #[tokio::test]
    async fn test_by_species_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/animales/especie/perro"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let animals = service(&server).await.by_species("perro").await.unwrap();
        assert!(animals.is_empty());
    }

    #[tokio::test]
    async fn test_mark_adopted_sends_empty_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/animales/3/adoptar"))
            .and(query_param("emailAdmin", "admin@patitas.cl"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        service(&server)
            .await
            .mark_adopted(3, "admin@patitas.cl")
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }
}
