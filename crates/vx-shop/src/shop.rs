//! The shop engine: catalog queries, cart and checkout.

use std::sync::Arc;

use chrono::Utc;

use crate::cart::{CartLine, ShopEvent, ShopState};
use crate::catalog::{Catalog, Product};
use crate::command::{ShopCommand, parse_command};
use crate::config::ShopConfig;
use crate::error::{ShopError, ShopResult};
use crate::filter::ProductFilter;
use crate::order::Order;
use crate::reply::{self, CartSummary, CartSummaryLine};
use crate::resolver::{resolve_product, suggest_products};
use crate::store::{JsonFileStore, OrderStore};

const HELP_TEXT: &str = "Things you can say:\n\
    show catalog, show me phones under 20000, find black hoodies in size M\n\
    add mug-001 to my cart, quantity 2 / I want the second phone\n\
    show my cart, clear cart, place my order, my last order\n\
    quit - leave the shop";

/// Serves shop sessions over a shared catalog and an order store.
#[derive(Debug)]
pub struct Shop<S> {
    catalog: Arc<Catalog>,
    store: S,
    config: ShopConfig,
}

impl Shop<JsonFileStore> {
    /// The bundled catalog, storing orders in the configured file.
    pub fn from_config(config: ShopConfig) -> Self {
        let store = JsonFileStore::new(&config.orders_path);
        Self::new(Arc::new(Catalog::bundled()), store).with_config(config)
    }
}

impl<S: OrderStore> Shop<S> {
    /// Create a shop with the default configuration.
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            store,
            config: ShopConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ShopConfig) -> Self {
        self.config = config;
        self
    }

    /// The catalog on sale.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The order store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Products matching a filter, in catalog order.
    pub fn list_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.catalog.list(filter)
    }

    /// Spoken summary of the products matching a tool-call filter.
    pub fn show_catalog(&self, filter: ProductFilter) -> String {
        let filter = filter.refine(&self.catalog);
        let products = self.list_products(&filter);
        tracing::debug!(matches = products.len(), "catalog query");
        reply::catalog_listing(&products, self.config.catalog_limit)
    }

    /// Resolve a reference and append a cart line.
    ///
    /// Nothing is recorded when the reference does not resolve.
    pub fn add_line(
        &self,
        state: &mut ShopState,
        reference: &str,
        quantity: u32,
        size: Option<&str>,
    ) -> ShopResult<&Product> {
        let product = resolve_product(&self.catalog, reference)
            .ok_or_else(|| ShopError::ProductNotFound(reference.trim().to_string()))?;

        let mut line = CartLine::new(&product.id, quantity);
        if let Some(size) = size.map(str::trim).filter(|s| !s.is_empty()) {
            line = line.with_size(size);
        }
        state.history.push(ShopEvent::AddToCart {
            time: Utc::now(),
            product_id: line.product_id.clone(),
            quantity: line.quantity,
        });
        tracing::debug!(session = %state.session_id, product = %product.id, quantity = line.quantity, "added to cart");
        state.cart.push(line);

        Ok(product)
    }

    /// Add to the cart and describe the outcome.
    pub fn add_to_cart(
        &self,
        state: &mut ShopState,
        reference: &str,
        quantity: u32,
        size: Option<&str>,
    ) -> String {
        match self.add_line(state, reference, quantity, size) {
            Ok(product) => reply::added(quantity.max(1), product),
            Err(err) => {
                tracing::warn!(session = %state.session_id, "{err}");
                reply::unresolved(&suggest_products(&self.catalog, reference, 3))
            }
        }
    }

    /// Price the cart at current catalog prices.
    ///
    /// Lines whose product has left the catalog are skipped.
    pub fn cart_summary(&self, state: &ShopState) -> CartSummary {
        let mut summary = CartSummary {
            currency: self.config.currency.clone(),
            ..CartSummary::default()
        };
        for line in &state.cart {
            let Some(product) = self.catalog.get(&line.product_id) else {
                tracing::warn!(product = %line.product_id, "cart line for unknown product skipped");
                continue;
            };
            let line_total = product.price.saturating_mul(u64::from(line.quantity));
            summary.total = summary.total.saturating_add(line_total);
            summary.lines.push(CartSummaryLine {
                name: product.name.clone(),
                quantity: line.quantity,
                size: line.size().map(str::to_string),
                line_total,
            });
        }
        summary
    }

    /// Read back the cart.
    pub fn show_cart(&self, state: &ShopState) -> String {
        reply::cart(&self.cart_summary(state))
    }

    /// Empty the cart.
    pub fn clear_cart(&self, state: &mut ShopState) -> String {
        state.cart.clear();
        state.history.push(ShopEvent::ClearCart { time: Utc::now() });
        reply::CART_CLEARED.to_string()
    }

    /// Turn the cart into a stored order.
    ///
    /// An empty cart fails with [`ShopError::EmptyCart`] before anything is
    /// written. A line whose product is missing aborts the whole order and
    /// leaves the cart as it was.
    pub fn checkout(&self, state: &mut ShopState) -> ShopResult<Order> {
        if state.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }

        let order = Order::price(&state.cart, &self.catalog, &self.config.currency)?;
        self.store.append(&order)?;

        state.orders.push(order.clone());
        state.cart.clear();
        state.history.push(ShopEvent::PlaceOrder {
            time: Utc::now(),
            order_id: order.id.clone(),
        });
        tracing::info!(session = %state.session_id, order = %order.id, total = order.total, "order placed");

        Ok(order)
    }

    /// Check out and describe the outcome.
    pub fn place_order(&self, state: &mut ShopState) -> String {
        match self.checkout(state) {
            Ok(order) => reply::order_placed(&order),
            Err(ShopError::EmptyCart) => reply::NOTHING_TO_ORDER.to_string(),
            Err(err) => {
                tracing::error!(session = %state.session_id, "order failed: {err}");
                format!("Sorry, I couldn't place that order ({err}). Your cart is unchanged.")
            }
        }
    }

    /// The last stored order, across all sessions.
    pub fn most_recent_order(&self) -> ShopResult<Option<Order>> {
        self.store.most_recent()
    }

    /// Read back the last stored order.
    pub fn last_order(&self) -> String {
        match self.most_recent_order() {
            Ok(order) => reply::last_order(order.as_ref()),
            Err(err) => {
                tracing::error!("reading orders failed: {err}");
                format!("Sorry, I couldn't read your past orders ({err}).")
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&self, state: &mut ShopState, command: ShopCommand) -> String {
        match command {
            ShopCommand::Browse(filter) => self.show_catalog(filter),
            ShopCommand::Add {
                reference,
                quantity,
                size,
            } => self.add_to_cart(state, &reference, quantity, size.as_deref()),
            ShopCommand::ShowCart => self.show_cart(state),
            ShopCommand::ClearCart => self.clear_cart(state),
            ShopCommand::PlaceOrder => self.place_order(state),
            ShopCommand::LastOrder => self.last_order(),
            ShopCommand::Help => HELP_TEXT.to_string(),
            ShopCommand::Quit => "Thanks for stopping by. See you soon!".to_string(),
        }
    }

    /// Parse and execute one customer turn.
    pub fn process(&self, state: &mut ShopState, input: &str) -> String {
        self.execute(state, parse_command(input))
    }
}
