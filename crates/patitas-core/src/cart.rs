//! # Cart Types
//!
//! Line items as stored by the cart microservice. The remote cart is the
//! source of truth; totals are always recomputed from a fresh item list,
//! never patched incrementally.

use crate::user::User;
use serde::{Deserialize, Serialize};

/// A line item in a user's remote cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Server-assigned line identity
    pub id: i64,

    /// Owning user
    #[serde(rename = "usuarioId")]
    pub user_id: i64,

    /// Referenced product
    #[serde(rename = "productoId")]
    pub product_id: i64,

    /// Product name captured by the cart service
    #[serde(rename = "productoNombre")]
    pub product_name: String,

    /// Unit price in CLP captured by the cart service
    #[serde(rename = "productoPrecio")]
    pub product_price: f64,

    /// Quantity, always >= 1; a line reduced to zero is deleted instead
    #[serde(rename = "cantidad")]
    pub quantity: u32,

    /// Optional product image URL
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CartItem {
    /// Price of this line: unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.product_price * self.quantity as f64
    }
}

/// Recompute a cart total from its items
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Aggregate cart view served by the cart-details endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSummary {
    /// Owning user record
    #[serde(rename = "usuario")]
    pub user: User,

    /// Current line items
    pub items: Vec<CartItem>,

    /// Server-computed total
    pub total: f64,

    /// Server-computed item count
    #[serde(rename = "cantidadItems")]
    pub item_count: u32,
}
