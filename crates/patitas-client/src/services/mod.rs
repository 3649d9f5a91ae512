//! # Service Clients
//!
//! One thin typed wrapper per microservice. Every method maps to exactly
//! one endpoint and returns `StoreResult<T>`; the shared request plumbing
//! lives in [`crate::gateway::ApiGateway`].

pub mod animals;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod forms;
pub mod orders;

pub use animals::AnimalService;
pub use auth::{AuthService, LoginResponse};
pub use cart::CartService;
pub use catalog::CatalogService;
pub use forms::FormService;
pub use orders::OrderService;
