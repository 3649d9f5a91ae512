//! # patitas-client
//!
//! HTTP client for the Patitas storefront: six REST microservices
//! (auth, catalog, cart, animals, adoption forms, orders) behind one
//! [`Storefront`] handle.
//!
//! The cart service owns the cart. [`SyncedCart`] mirrors it locally
//! and reloads the mirror after every mutation, so reads are instant
//! and writes are server-authoritative.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use patitas_client::Storefront;
//!
//! // Endpoints from config/services.toml or PATITAS_*_URL env vars
//! let store = Storefront::from_env()?;
//!
//! if store.session().login("ana@patitas.cl", "secreta").await {
//!     let cart = store.cart();
//!     cart.reload().await?;
//!     cart.add(product.id).await?;
//!
//!     let order = store.checkout().place_order(&cart).await?;
//!     println!("Order #{:?} placed for ${}", order.id, order.total);
//! }
//! ```
//!
//! ## Talking to one service directly
//!
//! ```rust,ignore
//! let available = store.animals().available().await?;
//! let results = store.catalog().search_by_name("collar").await?;
//! ```

pub mod checkout;
pub mod config;
pub mod favorites;
pub mod gateway;
pub mod services;
pub mod session;
pub mod storefront;
pub mod sync;

// Re-exports
pub use checkout::CheckoutFlow;
pub use config::ServiceEndpoints;
pub use favorites::FavoritesStore;
pub use gateway::ApiGateway;
pub use services::{
    AnimalService, AuthService, CartService, CatalogService, FormService, LoginResponse,
    OrderService,
};
pub use session::SessionStore;
pub use storefront::Storefront;
pub use sync::{SyncOutcome, SyncedCart};

// The core types travel with the client so callers need one import
pub use patitas_core::{
    cart_total, AdoptionAnswers, AdoptionForm, Animal, AnimalDraft, CartItem, CartSummary,
    FormStatus, Order, OrderItem, OrderStatus, OrderSummary, Product, ProductDraft, StoreError,
    StoreResult, User,
};
