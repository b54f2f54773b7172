//! Spoken replies for shop turns.
//!
//! Short lines, ids and prices spelled out so the customer can repeat them.

use crate::catalog::Product;
use crate::order::Order;

/// One priced line of the current cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryLine {
    /// Product name.
    pub name: String,
    /// Units.
    pub quantity: u32,
    /// Requested size, if any.
    pub size: Option<String>,
    /// Price for this line.
    pub line_total: u64,
}

/// A receipt-style view of the cart at current prices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Lines whose products are still in the catalog.
    pub lines: Vec<CartSummaryLine>,
    /// Sum of the line totals.
    pub total: u64,
    /// Currency of the total.
    pub currency: String,
}

impl CartSummary {
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub(crate) fn catalog_listing(products: &[&Product], limit: usize) -> String {
    if products.is_empty() {
        return "Sorry, I couldn't find any items that match. Would you like to try another search?"
            .to_string();
    }

    let shown = &products[..products.len().min(limit)];
    let mut lines = vec![format!(
        "Here are the top {} items I found in the shop:",
        shown.len()
    )];
    for (i, p) in shown.iter().enumerate() {
        let sizes = if p.sizes.is_empty() {
            String::new()
        } else {
            format!(" (sizes: {})", p.sizes.join(", "))
        };
        lines.push(format!(
            "{}. {}, {} {} (id: {}){sizes}",
            i + 1,
            p.name,
            p.price,
            p.currency,
            p.id
        ));
    }
    lines.push(
        "You can say: 'I want the second item in size M' or 'add mug-001 to my cart, quantity 2'."
            .to_string(),
    );
    if shown.iter().any(|p| p.category == "mobile") {
        lines.push(
            "To buy a phone say: 'Add phone-002 to my cart' or 'I want the second phone, quantity 1'."
                .to_string(),
        );
    }
    lines.join("\n")
}

pub(crate) fn added(quantity: u32, product: &Product) -> String {
    format!(
        "Added {quantity} x {} to your cart. What would you like to do next?",
        product.name
    )
}

pub(crate) fn unresolved(suggestions: &[&Product]) -> String {
    let mut out = "I couldn't resolve which product you meant. Try using the item id or say 'show catalog' to hear options.".to_string();
    if !suggestions.is_empty() {
        let names: Vec<String> = suggestions
            .iter()
            .map(|p| format!("{} ({})", p.name, p.id))
            .collect();
        out.push_str(&format!(" Did you mean: {}?", names.join(", ")));
    }
    out
}

pub(crate) fn cart(summary: &CartSummary) -> String {
    if summary.is_empty() {
        return "Your cart is empty. You can say 'show catalog' to browse items.".to_string();
    }

    let mut lines = vec!["Items in your cart:".to_string()];
    for line in &summary.lines {
        let size = line
            .size
            .as_deref()
            .map(|s| format!(", size {s}"))
            .unwrap_or_default();
        lines.push(format!(
            "- {} x {}{size}: {} {}",
            line.name, line.quantity, line.line_total, summary.currency
        ));
    }
    lines.push(format!("Cart total: {} {}", summary.total, summary.currency));
    lines.push("Say 'place my order' to checkout or 'clear cart' to empty the cart.".to_string());
    lines.join("\n")
}

pub(crate) const CART_CLEARED: &str = "Your cart has been cleared. What would you like to do next?";

pub(crate) const NOTHING_TO_ORDER: &str =
    "Your cart is empty, so there is nothing to place. Would you like to browse items?";

pub(crate) fn order_placed(order: &Order) -> String {
    format!(
        "Order placed. Order ID {}. Total {} {}. What would you like to do next?",
        order.id, order.total, order.currency
    )
}

pub(crate) fn last_order(order: Option<&Order>) -> String {
    let Some(order) = order else {
        return "You have no past orders yet.".to_string();
    };

    let mut lines = vec![format!(
        "Most recent order: {} placed {}",
        order.id,
        order.created_at.format("%Y-%m-%d %H:%M UTC")
    )];
    for item in &order.items {
        lines.push(format!(
            "- {} x {}: {} {}",
            item.name, item.quantity, item.line_total, order.currency
        ));
    }
    lines.push(format!("Total: {} {}", order.total, order.currency));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::catalog::Catalog;

    #[test]
    fn catalog_lists_at_most_limit() {
        let catalog = Catalog::bundled();
        let all: Vec<_> = catalog.products().iter().collect();
        let text = catalog_listing(&all, 8);
        assert!(text.starts_with("Here are the top 8 items"));
        assert!(text.contains("1. Stoneware Chai Mug, 299 INR (id: mug-001)"));
        assert!(text.contains("(sizes: S, M, L, XL)"));
        assert!(!text.contains("9. "));
        // no phone among the first eight
        assert!(!text.contains("To buy a phone"));
    }

    #[test]
    fn phone_hint() {
        let catalog = Catalog::bundled();
        let phones: Vec<_> = catalog
            .products()
            .iter()
            .filter(|p| p.category == "mobile")
            .collect();
        assert!(catalog_listing(&phones, 8).contains("To buy a phone"));
    }

    #[test]
    fn empty_catalog_reply() {
        assert!(catalog_listing(&[], 8).starts_with("Sorry"));
    }

    #[test]
    fn cart_receipt() {
        let summary = CartSummary {
            lines: vec![CartSummaryLine {
                name: "Graphic Tee".to_string(),
                quantity: 2,
                size: Some("L".to_string()),
                line_total: 998,
            }],
            total: 998,
            currency: "INR".to_string(),
        };
        let text = cart(&summary);
        assert!(text.contains("- Graphic Tee x 2, size L: 998 INR"));
        assert!(text.contains("Cart total: 998 INR"));
        assert!(cart(&CartSummary::default()).contains("cart is empty"));
    }

    #[test]
    fn last_order_reply() {
        let order = Order::price(&[CartLine::new("mug-001", 3)], &Catalog::bundled(), "INR").unwrap();
        let text = last_order(Some(&order));
        assert!(text.starts_with(&format!("Most recent order: {}", order.id)));
        assert!(text.contains("- Stoneware Chai Mug x 3: 897 INR"));
        assert!(text.ends_with("Total: 897 INR"));
        assert_eq!(last_order(None), "You have no past orders yet.");
    }

    #[test]
    fn unresolved_with_suggestions() {
        let catalog = Catalog::bundled();
        let mug = catalog.get("mug-001").unwrap();
        assert!(unresolved(&[mug]).ends_with("Did you mean: Stoneware Chai Mug (mug-001)?"));
        assert!(!unresolved(&[]).contains("Did you mean"));
    }
}
