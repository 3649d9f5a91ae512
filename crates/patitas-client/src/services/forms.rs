//! # Adoption Forms Service Client
//!
//! Submitting adoption applications and, for admins, reviewing them.
//! Review endpoints carry the acting admin's email and an optional
//! comment that the service stores alongside the verdict.

use crate::gateway::ApiGateway;
use patitas_core::{AdoptionAnswers, AdoptionForm, FormStatus, StoreResult};
use serde::Serialize;

/// Client for the adoption forms microservice
#[derive(Clone)]
pub struct FormService {
    gateway: ApiGateway,
    base: String,
}

impl FormService {
    /// Create a client rooted at the forms base URL
    pub fn new(gateway: ApiGateway, base: impl Into<String>) -> Self {
        Self {
            gateway,
            base: base.into(),
        }
    }

    /// Every submitted form (admin)
    pub async fn all(&self, admin_email: &str) -> StoreResult<Vec<AdoptionForm>> {
        self.gateway
            .get_query(&self.base, &[("emailAdmin", admin_email)])
            .await
    }

    /// One form by id
    pub async fn by_id(&self, id: i64) -> StoreResult<AdoptionForm> {
        self.gateway.get(&format!("{}/{id}", self.base)).await
    }

    /// Forms submitted by one user
    pub async fn for_user(&self, user_id: i64) -> StoreResult<Vec<AdoptionForm>> {
        self.gateway
            .get(&format!("{}/usuario/{user_id}", self.base))
            .await
    }

    /// Forms filed for one animal
    pub async fn for_animal(&self, animal_id: i64) -> StoreResult<Vec<AdoptionForm>> {
        self.gateway
            .get(&format!("{}/animal/{animal_id}", self.base))
            .await
    }

    /// Forms in one review state (admin)
    pub async fn by_status(
        &self,
        status: FormStatus,
        admin_email: &str,
    ) -> StoreResult<Vec<AdoptionForm>> {
        self.gateway
            .get_query(
                &format!("{}/estado/{}", self.base, status.as_str()),
                &[("emailAdmin", admin_email)],
            )
            .await
    }

    /// Submit an application for one animal
    pub async fn submit(
        &self,
        user_id: i64,
        animal_id: i64,
        answers: &AdoptionAnswers,
    ) -> StoreResult<AdoptionForm> {
        self.gateway
            .post(
                &format!("{}/adoptar/{user_id}/{animal_id}", self.base),
                answers,
            )
            .await
    }

    /// Approve a form (admin)
    pub async fn approve(
        &self,
        id: i64,
        admin_email: &str,
        comments: &str,
    ) -> StoreResult<AdoptionForm> {
        let request = ReviewRequest {
            admin_email,
            comments,
        };
        self.gateway
            .put(&format!("{}/{id}/aprobar", self.base), &request)
            .await
    }

    /// Reject a form (admin)
    pub async fn reject(
        &self,
        id: i64,
        admin_email: &str,
        comments: &str,
    ) -> StoreResult<AdoptionForm> {
        let request = ReviewRequest {
            admin_email,
            comments,
        };
        self.gateway
            .put(&format!("{}/{id}/rechazar", self.base), &request)
            .await
    }

    /// Remove a form (admin)
    pub async fn delete(&self, id: i64, admin_email: &str) -> StoreResult<()> {
        self.gateway
            .delete_query(&format!("{}/{id}", self.base), &[("emailAdmin", admin_email)])
            .await
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Verdict payload for approve and reject
#[derive(Debug, Serialize)]
struct ReviewRequest<'a> {
    #[serde(rename = "emailAdmin")]
    admin_email: &'a str,
    #[serde(rename = "comentarios")]
    comments: &'a str,
}
