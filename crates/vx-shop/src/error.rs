//! Error types for the shop engine.

use thiserror::Error;

/// Result type for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;

/// Errors that can occur while shopping.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A product reference or id did not resolve to a catalog product.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The order file could not be read or written.
    #[error("order storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The order file or catalog data is not valid JSON.
    #[error("invalid shop data: {0}")]
    Serialization(#[from] serde_json::Error),
}
