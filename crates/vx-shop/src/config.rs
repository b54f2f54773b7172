//! Configuration for a shop session.

use std::path::PathBuf;

/// Configuration for a shop session.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Where orders are stored.
    pub orders_path: PathBuf,
    /// Currency orders are placed in.
    pub currency: String,
    /// How many products a catalog reply lists at most.
    pub catalog_limit: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from("orders.json"),
            currency: "INR".to_string(),
            catalog_limit: 8,
        }
    }
}

impl ShopConfig {
    /// Set the order file.
    pub fn with_orders_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.orders_path = path.into();
        self
    }

    /// Set the order currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the catalog reply length (at least 1).
    pub fn with_catalog_limit(mut self, limit: usize) -> Self {
        self.catalog_limit = limit.max(1);
        self
    }
}
