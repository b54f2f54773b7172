use comfy_table::{ContentArrangement, Table};

use vx_shop::{Catalog, ProductFilter};

/// Filter flags from the command line.
pub struct CatalogArgs {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl CatalogArgs {
    fn into_filter(self) -> ProductFilter {
        ProductFilter {
            query: self.query,
            category: self.category,
            min_price: self.min_price,
            max_price: self.max_price,
            color: self.color,
            size: self.size,
        }
    }
}

pub fn run(args: CatalogArgs, json: bool) -> Result<(), String> {
    let catalog = Catalog::bundled();
    let filter = args.into_filter().refine(&catalog);
    let products = catalog.list(&filter);

    if json {
        let out = serde_json::to_string_pretty(&products).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if products.is_empty() {
        println!("  No products found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Price", "Category", "Color", "Sizes"]);

    for p in &products {
        let sizes = if p.sizes.is_empty() {
            "-".to_string()
        } else {
            p.sizes.join(", ")
        };
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            format!("{} {}", p.price, p.currency),
            p.category.clone(),
            p.color.clone(),
            sizes,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} products", products.len());

    Ok(())
}
