//! The product catalog.

use serde::{Deserialize, Serialize};

use crate::error::ShopResult;

/// A product on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id, e.g. `mug-001`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price in whole currency units.
    pub price: u64,
    /// ISO currency code.
    pub currency: String,
    /// Category, e.g. `mobile` or `tshirt`.
    pub category: String,
    /// Color name.
    pub color: String,
    /// Available sizes. Empty means the product has no sizes.
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// Whether the product comes in the given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s.eq_ignore_ascii_case(size))
    }
}

/// An ordered, immutable list of products.
///
/// Declaration order matters: ordinal references ("the second one") count
/// positions in it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> ShopResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// All products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by exact id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in &self.products {
            if !out.contains(&p.category.as_str()) {
                out.push(&p.category);
            }
        }
        out
    }

    /// The neighbourhood shop's stock.
    pub fn bundled() -> Self {
        Self::new(vec![
            item("mug-001", "Stoneware Chai Mug", "Hand-glazed ceramic mug perfect for masala chai.", 299, "mug", "blue", &[]),
            item("tee-001", "Signature Cotton Tee", "Comfort-fit cotton t-shirt with subtle logo.", 799, "tshirt", "black", &["S", "M", "L", "XL"]),
            item("hoodie-001", "Cozy Hoodie", "Warm pullover hoodie, fleece-lined.", 1499, "hoodie", "grey", &["M", "L", "XL"]),
            item("mug-002", "Insulated Travel Mug", "Keeps chai warm on your way to work.", 599, "mug", "white", &[]),
            item("hoodie-002", "Black Zip Hoodie", "Lightweight zip-up hoodie, black.", 1299, "hoodie", "black", &["S", "M", "L"]),
            item("tee-002", "Casual Cotton Tee", "Everyday cotton t-shirt, breathable and soft.", 299, "tshirt", "white", &["S", "M", "L", "XL"]),
            item("tee-003", "Graphic Tee", "Printed graphic t-shirt with vibrant design.", 499, "tshirt", "navy", &["S", "M", "L", "XL"]),
            item("tee-004", "Premium Polo Tee", "Polo-style t-shirt with premium stitching.", 999, "tshirt", "maroon", &["M", "L", "XL"]),
            item("tee-005", "Summer V-neck Tee", "Lightweight V-neck tee for hot days.", 350, "tshirt", "sky", &["S", "M", "L"]),
            item("tee-006", "Henley Tee", "Smart casual henley style t-shirt.", 699, "tshirt", "olive", &["M", "L", "XL"]),
            item("rain-001", "Light Raincoat", "Waterproof light raincoat, packable.", 1299, "raincoat", "yellow", &["M", "L", "XL"]),
            item("rain-002", "Heavy Duty Raincoat", "Heavy-duty rainproof coat for monsoon.", 2499, "raincoat", "navy", &["L", "XL"]),
            item("laptop-001", "Generic Laptop (50k)", "A reliable laptop suitable for everyday use.", 50000, "laptop", "silver", &[]),
            item("laptop-002", "Dell Inspiron (Budget)", "Compact Dell laptop for students and professionals.", 27800, "laptop", "black", &[]),
            item("laptop-003", "Lenovo ThinkPad", "Durable Lenovo laptop with strong performance.", 60000, "laptop", "black", &[]),
            item("laptop-004", "HP Pavilion", "High-performance HP laptop for creators.", 100000, "laptop", "silver", &[]),
            item("storage-001", "External Hard Disk 1TB", "Portable external hard disk for backups.", 50000, "storage", "black", &[]),
            item("phone-001", "Redmi Note (Entry)", "Affordable Redmi smartphone with solid features.", 12000, "mobile", "blue", &[]),
            item("phone-002", "Oppo A-Series", "Stylish Oppo phone with good camera.", 18000, "mobile", "green", &[]),
            item("phone-003", "Samsung M-Series", "Mid-range Samsung phone for everyday use.", 25000, "mobile", "black", &[]),
            item("phone-004", "iPhone (Standard)", "Apple iPhone model example (price varies by config).", 50000, "mobile", "white", &[]),
            item("phone-005", "Oppo Reno", "Higher-end Oppo phone with premium features.", 35000, "mobile", "black", &[]),
            item("phone-006", "Redmi Pro", "Redmi higher-tier phone with improved camera and battery.", 22000, "mobile", "grey", &[]),
        ])
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: &str,
    color: &str,
    sizes: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        currency: "INR".to_string(),
        category: category.to_string(),
        color: color.to_string(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn bundled_ids_are_unique() {
        let catalog = Catalog::bundled();
        let ids: HashSet<_> = catalog.products().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn bundled_prices_are_positive() {
        assert!(Catalog::bundled().products().iter().all(|p| p.price > 0));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.get("mug-001").map(|p| p.price), Some(299));
        assert!(catalog.get("MUG-001").is_none());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn categories_in_first_seen_order() {
        let catalog = Catalog::bundled();
        let cats = catalog.categories();
        assert_eq!(&cats[..3], &["mug", "tshirt", "hoodie"]);
        assert!(cats.contains(&"mobile"));
    }

    #[test]
    fn sizes_are_case_insensitive() {
        let catalog = Catalog::bundled();
        let tee = catalog.get("tee-001").unwrap();
        assert!(tee.has_size("m"));
        assert!(!tee.has_size("XXL"));
        assert!(!catalog.get("mug-001").unwrap().has_size("M"));
    }

    #[test]
    fn from_json_defaults_sizes() {
        let json = r#"[{"id":"x-1","name":"X","description":"","price":5,
                        "currency":"INR","category":"misc","color":"red"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.products()[0].sizes.is_empty());
    }
}
