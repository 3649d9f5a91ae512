//! # Auth Service Client
//!
//! Login, registration and user lookups. Persisting the session is the
//! session store's job; this client only speaks the wire protocol.

use crate::gateway::ApiGateway;
use patitas_core::{StoreResult, User};
use serde::{Deserialize, Serialize};

/// Client for the auth microservice
#[derive(Clone)]
pub struct AuthService {
    gateway: ApiGateway,
    base: String,
}

impl AuthService {
    /// Create a client rooted at the auth base URL
    pub fn new(gateway: ApiGateway, base: impl Into<String>) -> Self {
        Self {
            gateway,
            base: base.into(),
        }
    }

    /// Check credentials. Wrong credentials come back as an HTTP 401
    /// carrying the service's rejection message.
    pub async fn login(&self, email: &str, password: &str) -> StoreResult<LoginResponse> {
        let request = LoginRequest {
            email,
            password,
        };
        self.gateway
            .post(&format!("{}/login", self.base), &request)
            .await
    }

    /// Create an account; answers with the stored user record
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> StoreResult<User> {
        let request = RegisterRequest {
            name,
            email,
            phone,
            password,
        };
        self.gateway
            .post(&format!("{}/register", self.base), &request)
            .await
    }

    /// Fetch the full user record for an email
    pub async fn user_by_email(&self, email: &str) -> StoreResult<User> {
        self.gateway
            .get(&format!("{}/usuario/correo/{email}", self.base))
            .await
    }

    /// Fetch the full user record by id
    pub async fn user_by_id(&self, id: i64) -> StoreResult<User> {
        self.gateway
            .get(&format!("{}/usuarios/{id}", self.base))
            .await
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    #[serde(rename = "contrasena")]
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    #[serde(rename = "nombre")]
    name: &'a str,
    email: &'a str,
    #[serde(rename = "telefono")]
    phone: &'a str,
    #[serde(rename = "contrasena")]
    password: &'a str,
}

/// Outcome of a credential check
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use patitas_core::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service(server: &MockServer) -> AuthService {
        let gateway = ApiGateway::new(Arc::new(MemoryStorage::new()));
        AuthService::new(gateway, format!("{}/auth", server.uri()))
    }

    #[tokio::test]
    async fn test_login_sends_wire_field_names() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "ana@example.cl", "contrasena": "hola123"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login exitoso.",
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = service(&server)
            .await
            .login("ana@example.cl", "hola123")
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Login exitoso.");
    }

    #[tokio::test]
    async fn test_register_returns_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({
                "nombre": "Ana Rojas",
                "email": "ana@example.cl",
                "telefono": "+56911112222",
                "contrasena": "hola123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "nombre": "Ana Rojas",
                "email": "ana@example.cl",
                "telefono": "+56911112222",
                "isAdmin": false
            })))
            .mount(&server)
            .await;

        let user = service(&server)
            .await
            .register("Ana Rojas", "ana@example.cl", "+56911112222", "hola123")
            .await
            .unwrap();

        assert_eq!(user.id, 7);
        assert!(!user.is_admin());
    }

    #[tokio::test]
    async fn test_user_by_email_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/usuario/correo/ana@example.cl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7, "nombre": "Ana", "email": "ana@example.cl"
            })))
            .mount(&server)
            .await;

        let user = service(&server).await.user_by_email("ana@example.cl").await.unwrap();
        assert_eq!(user.id, 7);
    }
}
