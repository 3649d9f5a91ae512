//! # API Gateway Client
//!
//! One thin request wrapper shared by every service client. It attaches
//! the persisted bearer token and a correlation id, serializes JSON
//! bodies, and normalizes any non-2xx response into a typed error. It
//! never retries.

use patitas_core::{BoxedStorage, StoreError, StoreResult, TOKEN_KEY};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Typed HTTP front door to the microservices
#[derive(Clone)]
pub struct ApiGateway {
    client: Client,
    storage: BoxedStorage,
}

impl ApiGateway {
    /// Create a gateway reading the bearer token from the given storage
    pub fn new(storage: BoxedStorage) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, storage }
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> StoreResult<T> {
        self.send(self.client.get(url)).await
    }

    /// GET a JSON resource with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> StoreResult<T> {
        self.send(self.client.get(url).query(query)).await
    }

    /// POST a JSON body, parse a JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> StoreResult<T> {
        self.send(self.client.post(url).json(body)).await
    }

    /// PUT a JSON body, parse a JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> StoreResult<T> {
        self.send(self.client.put(url).json(body)).await
    }

    /// PUT without a body, parse a JSON response
    pub async fn put_empty<T: DeserializeOwned>(&self, url: &str) -> StoreResult<T> {
        self.send(self.client.put(url)).await
    }

    /// PUT without a body, with query parameters, ignoring the response
    pub async fn put_empty_query(&self, url: &str, query: &[(&str, &str)]) -> StoreResult<()> {
        self.execute(self.client.put(url).query(query)).await?;
        Ok(())
    }

    /// DELETE, ignoring the (usually empty) response body
    pub async fn delete(&self, url: &str) -> StoreResult<()> {
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }

    /// DELETE with query parameters, ignoring the response body
    pub async fn delete_query(&self, url: &str, query: &[(&str, &str)]) -> StoreResult<()> {
        self.execute(self.client.delete(url).query(query)).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> StoreResult<T> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body)
            .map_err(|e| StoreError::Serialization(format!("Failed to parse response: {e}")))
    }

    /// Runs one request and returns the raw success body. All error
    /// normalization lives here.
    async fn execute(&self, request: RequestBuilder) -> StoreResult<String> {
        let mut request = request.header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());

        if let Some(token) = self.bearer_token() {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let request = request
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!("{method} {url}");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(status.as_u16(), &body);
            error!("{method} {url} failed: status={status}, message={message}");
            return Err(StoreError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    fn bearer_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Cannot read auth token: {e}");
                None
            }
        }
    }
}

/// Error bodies are not uniform across the services: auth answers
/// `{"message": ...}` while cart and orders answer `{"error": ...}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    format!("HTTP error, status={status}")
}
