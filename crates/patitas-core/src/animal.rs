//! # Animal Types
//!
//! Adoption listings served by the animals microservice.

use serde::{Deserialize, Serialize};

/// An animal listed for adoption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Server-assigned identity
    pub id: i64,

    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Species (e.g. "perro", "gato")
    #[serde(rename = "especie")]
    pub species: String,

    /// Breed label
    #[serde(rename = "raza", default)]
    pub breed: String,

    /// Free-form age text ("2 años", "6 meses")
    #[serde(rename = "edad", default)]
    pub age: String,

    /// Short description
    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Inline image payload (base64) when the service embeds one
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Adoption flag; the service omits or nulls it for new listings
    #[serde(rename = "isAdoptado", default, skip_serializing_if = "Option::is_none")]
    pub adopted: Option<bool>,
}

impl Animal {
    /// Whether this animal is still available for adoption
    pub fn is_available(&self) -> bool {
        !self.adopted.unwrap_or(false)
    }
}

/// Fields accepted by the admin create/update endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimalDraft {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "especie")]
    pub species: String,

    #[serde(rename = "raza", default)]
    pub breed: String,

    #[serde(rename = "edad", default)]
    pub age: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl AnimalDraft {
    /// Create a draft with the required fields
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            breed: String::new(),
            age: String::new(),
            description: String::new(),
        }
    }

    /// Builder: set breed
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    /// Builder: set age text
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}
