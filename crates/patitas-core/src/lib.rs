//! # patitas-core
//!
//! Core types and traits for the patitas storefront client.
//!
//! This crate provides:
//! - Wire types for the six microservices (`User`, `Product`, `Animal`,
//!   `CartItem`, `Order`, `AdoptionForm`)
//! - `CartApi` / `OrderApi` traits the cart and checkout logic run against
//! - `IdentityResolver` for injected session identity
//! - `KeyValueStorage` for persisted client state
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use patitas_core::{cart_total, CartItem, OrderItem};
//!
//! // Totals are always recomputed from the authoritative item list
//! let items: Vec<CartItem> = remote.items_for_user(user_id).await?;
//! let total = cart_total(&items);
//!
//! // Checkout freezes the cart lines into order lines
//! let lines: Vec<OrderItem> = items.iter().map(OrderItem::from_cart_item).collect();
//! ```

pub mod animal;
pub mod cart;
pub mod error;
pub mod form;
pub mod identity;
pub mod order;
pub mod product;
pub mod remote;
pub mod storage;
pub mod user;

// Re-exports for convenience
pub use animal::{Animal, AnimalDraft};
pub use cart::{cart_total, CartItem, CartSummary};
pub use error::{StoreError, StoreResult};
pub use form::{AdoptionAnswers, AdoptionForm, FormStatus};
pub use identity::{BoxedIdentityResolver, FixedIdentity, IdentityResolver};
pub use order::{Order, OrderItem, OrderStatus, OrderSummary};
pub use product::{Product, ProductDraft};
pub use remote::{BoxedCartApi, BoxedOrderApi, CartApi, OrderApi};
pub use storage::{
    favorites_key, BoxedStorage, FileStorage, KeyValueStorage, MemoryStorage, TOKEN_KEY, USER_KEY,
};
pub use user::User;
