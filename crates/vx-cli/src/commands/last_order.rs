use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use vx_shop::{JsonFileStore, OrderStore};

pub fn run(orders: &Path, json: bool) -> Result<(), String> {
    let store = JsonFileStore::new(orders);
    let order = store
        .most_recent()
        .map_err(|e| format!("cannot read {}: {e}", orders.display()))?;

    let Some(order) = order else {
        println!("  No orders yet.");
        return Ok(());
    };

    if json {
        let out = serde_json::to_string_pretty(&order).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}  ({})",
        "Order".bold(),
        order.id.bold(),
        order.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Product", "Name", "Qty", "Unit", "Line total", "Size"]);

    for item in &order.items {
        table.add_row(vec![
            item.product_id.clone(),
            item.name.clone(),
            item.quantity.to_string(),
            item.unit_price.to_string(),
            item.line_total.to_string(),
            item.attrs.get("size").cloned().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Total: {} {}", order.total, order.currency);

    Ok(())
}
