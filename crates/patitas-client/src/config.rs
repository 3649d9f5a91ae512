//! # Service Endpoints
//!
//! Base URLs for the six microservices. Defaults match the local
//! docker-compose layout; overrides come from the environment or from
//! `config/services.toml`.

use patitas_core::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Base URLs for every microservice the client talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    /// Auth service (login, register, user lookups)
    #[serde(default = "default_auth")]
    pub auth: String,

    /// Product catalog service
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Cart service
    #[serde(default = "default_cart")]
    pub cart: String,

    /// Animal listings service
    #[serde(default = "default_animals")]
    pub animals: String,

    /// Adoption forms service
    #[serde(default = "default_forms")]
    pub forms: String,

    /// Order service
    #[serde(default = "default_orders")]
    pub orders: String,
}

fn default_auth() -> String {
    "http://localhost:8090/auth".to_string()
}

fn default_catalog() -> String {
    "http://localhost:8091/productos".to_string()
}

fn default_cart() -> String {
    "http://localhost:8092/carrito".to_string()
}

fn default_animals() -> String {
    "http://localhost:8093/animales".to_string()
}

fn default_forms() -> String {
    "http://localhost:8094/formularios".to_string()
}

fn default_orders() -> String {
    "http://localhost:8095/ordenes".to_string()
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            auth: default_auth(),
            catalog: default_catalog(),
            cart: default_cart(),
            animals: default_animals(),
            forms: default_forms(),
            orders: default_orders(),
        }
    }
}

impl ServiceEndpoints {
    /// Load endpoints from environment variables, falling back to the
    /// local defaults.
    ///
    /// Recognized env vars: `PATITAS_AUTH_URL`, `PATITAS_CATALOG_URL`,
    /// `PATITAS_CART_URL`, `PATITAS_ANIMALS_URL`, `PATITAS_FORMS_URL`,
    /// `PATITAS_ORDERS_URL`.
    pub fn from_env() -> StoreResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let endpoints = Self {
            auth: env_or("PATITAS_AUTH_URL", default_auth),
            catalog: env_or("PATITAS_CATALOG_URL", default_catalog),
            cart: env_or("PATITAS_CART_URL", default_cart),
            animals: env_or("PATITAS_ANIMALS_URL", default_animals),
            forms: env_or("PATITAS_FORMS_URL", default_forms),
            orders: env_or("PATITAS_ORDERS_URL", default_orders),
        };
        endpoints.validate()?;
        Ok(endpoints)
    }

    /// Parse endpoints from a TOML document. Missing keys fall back to
    /// the local defaults.
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        let endpoints: Self = toml::from_str(toml_str)
            .map_err(|e| StoreError::Configuration(format!("invalid endpoints config: {e}")))?;
        endpoints.validate()?;
        Ok(endpoints)
    }

    /// Load endpoints from `config/services.toml` when present, else from
    /// the environment.
    pub fn load() -> StoreResult<Self> {
        let config_paths = [
            "config/services.toml",
            "../config/services.toml",
            "../../config/services.toml",
        ];

        for path in config_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                let endpoints = Self::from_toml(&content)?;
                tracing::info!("Loaded service endpoints from {path}");
                return Ok(endpoints);
            }
        }

        Self::from_env()
    }

    /// Point every service at a single origin. Intended for tests where
    /// one mock server answers all routes.
    pub fn single_origin(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            auth: format!("{base}/auth"),
            catalog: format!("{base}/productos"),
            cart: format!("{base}/carrito"),
            animals: format!("{base}/animales"),
            forms: format!("{base}/formularios"),
            orders: format!("{base}/ordenes"),
        }
    }

    /// Builder: set the auth base URL
    pub fn with_auth(mut self, url: impl Into<String>) -> Self {
        self.auth = url.into();
        self
    }

    /// Builder: set the catalog base URL
    pub fn with_catalog(mut self, url: impl Into<String>) -> Self {
        self.catalog = url.into();
        self
    }

    /// Builder: set the cart base URL
    pub fn with_cart(mut self, url: impl Into<String>) -> Self {
        self.cart = url.into();
        self
    }

    /// Builder: set the animals base URL
    pub fn with_animals(mut self, url: impl Into<String>) -> Self {
        self.animals = url.into();
        self
    }

    /// Builder: set the forms base URL
    pub fn with_forms(mut self, url: impl Into<String>) -> Self {
        self.forms = url.into();
        self
    }

    /// Builder: set the orders base URL
    pub fn with_orders(mut self, url: impl Into<String>) -> Self {
        self.orders = url.into();
        self
    }

    fn validate(&self) -> StoreResult<()> {
        for (name, url) in [
            ("auth", &self.auth),
            ("catalog", &self.catalog),
            ("cart", &self.cart),
            ("animals", &self.animals),
            ("forms", &self.forms),
            ("orders", &self.orders),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(StoreError::Configuration(format!(
                    "{name} endpoint must start with http:// or https://, got {url}"
                )));
            }
        }
        Ok(())
    }
}

fn env_or(var: &str, fallback: fn() -> String) -> String {
    env::var(var).unwrap_or_else(|_| fallback())
}
