//! # Order Types
//!
//! Orders created at checkout. Line items are denormalized copies of the
//! cart lines at purchase time, deliberately decoupled from the live
//! catalog.

use crate::cart::CartItem;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A line item frozen into an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Server-assigned line identity, absent in create payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning order, absent in create payloads
    #[serde(rename = "ordenId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// Referenced product
    #[serde(rename = "productoId")]
    pub product_id: i64,

    /// Product name at purchase time
    #[serde(rename = "productoNombre")]
    pub product_name: String,

    /// Unit price in CLP at purchase time
    #[serde(rename = "productoPrecio")]
    pub product_price: f64,

    /// Quantity purchased
    #[serde(rename = "cantidad")]
    pub quantity: u32,

    /// Product image at purchase time
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl OrderItem {
    /// Freeze a cart line into an order line
    pub fn from_cart_item(item: &CartItem) -> Self {
        Self {
            id: None,
            order_id: None,
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            product_price: item.product_price,
            quantity: item.quantity,
            image_url: item.image_url.clone(),
        }
    }

    /// Price of this line: unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.product_price * self.quantity as f64
    }
}

/// Order lifecycle status as the order service spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Completada")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Purchasing user
    #[serde(rename = "usuarioId")]
    pub user_id: i64,

    /// Total in CLP captured at checkout
    pub total: f64,

    /// Creation timestamp (service-local date-time, no zone)
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,

    /// Lifecycle status; the create endpoint sets it server-side
    #[serde(default)]
    pub status: OrderStatus,

    /// Line items. The create endpoint answers with the bare order, so
    /// callers fetching an order directly may see this empty until they
    /// ask the items endpoint.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Number of units across all line items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether this order carries no line items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Aggregate order view served by the order-details endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// The order record
    #[serde(rename = "orden")]
    pub order: Order,

    /// Its line items
    pub items: Vec<OrderItem>,

    /// Server-computed item count
    #[serde(rename = "cantidadItems")]
    pub item_count: u32,
}
