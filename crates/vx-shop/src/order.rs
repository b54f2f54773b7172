//! Priced, immutable orders.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::catalog::Catalog;
use crate::error::{ShopError, ShopResult};

/// A priced snapshot of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog id.
    pub product_id: String,
    /// Product name at the time of ordering.
    pub name: String,
    /// Unit price at the time of ordering.
    pub unit_price: u64,
    /// Units ordered.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub line_total: u64,
    /// Attributes carried over from the cart line.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// A placed order, as kept in the order file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// `order-` followed by 8 hex characters.
    pub id: String,
    /// Priced lines in cart order.
    pub items: Vec<OrderItem>,
    /// Sum of line totals.
    pub total: u64,
    /// Currency code.
    pub currency: String,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Price cart lines against the catalog.
    ///
    /// Any line whose product is missing aborts the whole order with
    /// [`ShopError::ProductNotFound`].
    pub fn price(lines: &[CartLine], catalog: &Catalog, currency: &str) -> ShopResult<Self> {
        let items = lines
            .iter()
            .map(|line| {
                let product = catalog
                    .get(&line.product_id)
                    .ok_or_else(|| ShopError::ProductNotFound(line.product_id.clone()))?;
                Ok(OrderItem {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    unit_price: product.price,
                    quantity: line.quantity,
                    line_total: product.price.saturating_mul(u64::from(line.quantity)),
                    attrs: line.attrs.clone(),
                })
            })
            .collect::<ShopResult<Vec<_>>>()?;

        let total = items.iter().map(|i| i.line_total).fold(0, u64::saturating_add);

        Ok(Self {
            id: new_order_id(),
            items,
            total,
            currency: currency.to_string(),
            created_at: Utc::now(),
        })
    }
}

fn new_order_id() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(8);
    format!("order-{hex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_lines() {
        let catalog = Catalog::bundled();
        let lines = vec![
            CartLine::new("mug-001", 2),
            CartLine::new("tee-001", 1).with_size("M"),
        ];
        let order = Order::price(&lines, &catalog, "INR").unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].line_total, 598);
        assert_eq!(order.items[1].attrs.get("size").map(String::as_str), Some("M"));
        assert_eq!(order.total, 2 * 299 + 799);
        assert_eq!(order.currency, "INR");
    }

    #[test]
    fn id_shape() {
        let order = Order::price(&[CartLine::new("mug-001", 1)], &Catalog::bundled(), "INR").unwrap();
        let hex = order.id.strip_prefix("order-").unwrap();
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn missing_product_aborts() {
        let lines = vec![CartLine::new("mug-001", 1), CartLine::new("ghost-999", 1)];
        let err = Order::price(&lines, &Catalog::bundled(), "INR").unwrap_err();
        assert!(matches!(err, ShopError::ProductNotFound(id) if id == "ghost-999"));
    }

    #[test]
    fn serialized_shape() {
        let order = Order::price(&[CartLine::new("mug-001", 1)], &Catalog::bundled(), "INR").unwrap();
        let json = serde_json::to_value(&order).unwrap();
        for key in ["id", "items", "total", "currency", "created_at"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        for key in ["product_id", "name", "unit_price", "quantity", "line_total", "attrs"] {
            assert!(json["items"][0].get(key).is_some(), "missing item {key}");
        }
        assert!(json["created_at"].as_str().unwrap().ends_with('Z'));
    }
}
