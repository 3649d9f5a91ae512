//! # Product Types
//!
//! Catalog entries served by the product microservice. Prices are CLP
//! amounts carried as floating point, matching the service's own math.

use serde::{Deserialize, Serialize};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identity
    pub id: i64,

    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Short description
    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Unit price in CLP
    #[serde(rename = "precio")]
    pub price: f64,

    /// Inline image payload (base64) when the service embeds one
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Category label
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
}

/// Fields accepted by the admin create/update endpoints.
/// The server assigns the id and stores the image separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductDraft {
    /// Create a draft with the required fields
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
