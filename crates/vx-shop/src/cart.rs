//! Per-session shopping state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::Order;

/// A product reference in the cart. Prices are looked up at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id.
    pub product_id: String,
    /// Quantity, at least one.
    pub quantity: u32,
    /// Free-form attributes such as `size`. Not validated against the product.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl CartLine {
    /// A line for `quantity` units; zero is bumped to one.
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: quantity.max(1),
            attrs: BTreeMap::new(),
        }
    }

    /// Record a requested size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.attrs.insert("size".to_string(), size.into());
        self
    }

    /// The requested size, if any.
    pub fn size(&self) -> Option<&str> {
        self.attrs.get("size").map(String::as_str)
    }
}

/// Something that happened in a shop session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShopEvent {
    /// A line was added to the cart.
    AddToCart {
        /// When.
        time: DateTime<Utc>,
        /// Product added.
        product_id: String,
        /// Units added.
        quantity: u32,
    },
    /// The cart was emptied.
    ClearCart {
        /// When.
        time: DateTime<Utc>,
    },
    /// An order was placed.
    PlaceOrder {
        /// When.
        time: DateTime<Utc>,
        /// The new order's id.
        order_id: String,
    },
}

/// Mutable state of one shopping conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopState {
    /// Opaque session identifier.
    pub session_id: String,
    /// When the session began.
    pub started_at: DateTime<Utc>,
    /// Lines waiting for checkout, in the order they were added.
    pub cart: Vec<CartLine>,
    /// Orders placed during this session.
    pub orders: Vec<Order>,
    /// Session events, oldest first.
    pub history: Vec<ShopEvent>,
}

impl ShopState {
    /// A fresh session with an empty cart.
    pub fn new() -> Self {
        let mut session_id = Uuid::new_v4().simple().to_string();
        session_id.truncate(8);
        Self {
            session_id,
            started_at: Utc::now(),
            cart: Vec::new(),
            orders: Vec::new(),
            history: Vec::new(),
        }
    }
}

impl Default for ShopState {
    fn default() -> Self {
        Self::new()
    }
}
