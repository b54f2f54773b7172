//! Catalog, cart and order engine for the Voxtale shop assistant.
//!
//! Spoken product references ("the second phone", "black hoodie",
//! "mug-001") are resolved against a static catalog, collected into a
//! per-session cart and checked out into priced, immutable orders kept in a
//! JSON order file.

pub mod cart;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod filter;
pub mod order;
pub mod prompt;
pub mod reply;
pub mod resolver;
pub mod shop;
pub mod store;

pub use cart::{CartLine, ShopEvent, ShopState};
pub use catalog::{Catalog, Product};
pub use command::{ShopCommand, parse_command};
pub use config::ShopConfig;
pub use error::{ShopError, ShopResult};
pub use filter::ProductFilter;
pub use order::{Order, OrderItem};
pub use resolver::resolve_product;
pub use reply::{CartSummary, CartSummaryLine};
pub use shop::Shop;
pub use store::{JsonFileStore, MemoryStore, OrderStore};
