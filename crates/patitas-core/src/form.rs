//! # Adoption Form Types
//!
//! Applications submitted for an animal and reviewed by an admin.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review state as the forms service spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "APROBADO")]
    Approved,
    #[serde(rename = "RECHAZADO")]
    Rejected,
}

impl Default for FormStatus {
    fn default() -> Self {
        FormStatus::Pending
    }
}

impl FormStatus {
    /// The wire spelling, as used in status-filter paths
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Pending => "PENDIENTE",
            FormStatus::Approved => "APROBADO",
            FormStatus::Rejected => "RECHAZADO",
        }
    }
}

/// A submitted adoption application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionForm {
    /// Server-assigned identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Applying user
    #[serde(rename = "usuarioId")]
    pub user_id: i64,

    /// Animal applied for
    #[serde(rename = "animalId")]
    pub animal_id: i64,

    /// Home address
    #[serde(rename = "direccion")]
    pub address: String,

    /// Housing type ("casa", "departamento", ...)
    #[serde(rename = "tipoVivienda")]
    pub housing_type: String,

    /// Windows have protective screens
    #[serde(rename = "tieneMallasVentanas")]
    pub has_window_screens: bool,

    /// Applicant lives in an apartment
    #[serde(rename = "viveEnDepartamento")]
    pub lives_in_apartment: bool,

    /// Other animals already in the home
    #[serde(rename = "tieneOtrosAnimales")]
    pub has_other_pets: bool,

    /// Why the applicant wants to adopt
    #[serde(rename = "motivoAdopcion")]
    pub adoption_reason: String,

    /// Review state
    #[serde(rename = "estado", default)]
    pub status: FormStatus,

    /// Reviewer comments
    #[serde(
        rename = "comentariosAdmin",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub admin_comments: Option<String>,

    /// Submission timestamp
    #[serde(
        rename = "fechaCreacion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,

    /// Review timestamp
    #[serde(
        rename = "fechaRevision",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reviewed_at: Option<NaiveDateTime>,
}

/// The answers payload accepted by the submit endpoint. User and animal
/// travel in the path, review fields are server-owned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdoptionAnswers {
    #[serde(rename = "direccion")]
    pub address: String,

    #[serde(rename = "tipoVivienda")]
    pub housing_type: String,

    #[serde(rename = "tieneMallasVentanas")]
    pub has_window_screens: bool,

    #[serde(rename = "viveEnDepartamento")]
    pub lives_in_apartment: bool,

    #[serde(rename = "tieneOtrosAnimales")]
    pub has_other_pets: bool,

    #[serde(rename = "motivoAdopcion")]
    pub adoption_reason: String,
}

impl AdoptionAnswers {
    /// Create answers with the required fields
    pub fn new(address: impl Into<String>, housing_type: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            housing_type: housing_type.into(),
            ..Self::default()
        }
    }

    /// Builder: windows have protective screens
    pub fn with_window_screens(mut self, value: bool) -> Self {
        self.has_window_screens = value;
        self
    }

    /// Builder: applicant lives in an apartment
    pub fn with_apartment(mut self, value: bool) -> Self {
        self.lives_in_apartment = value;
        self
    }

    /// Builder: other animals already in the home
    pub fn with_other_pets(mut self, value: bool) -> Self {
        self.has_other_pets = value;
        self
    }

    /// Builder: adoption motivation text
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.adoption_reason = reason.into();
        self
    }
}
