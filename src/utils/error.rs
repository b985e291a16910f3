use crate::domain::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Product {product_id} not found")]
    ProductNotFound { product_id: ProductId },

    #[error("Stock for product {product_id} not found")]
    StockNotFound { product_id: ProductId },

    #[error("Requested amount {requested} of product {product_id} exceeds stock of {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: u32,
    },

    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cart provider has been disposed")]
    ProviderDisposed,

    #[error("Cart accessed outside of a cart provider")]
    OutsideProvider,
}

impl CartError {
    /// Stock refusals get their own user-facing message; every other failure
    /// collapses into the operation's generic one.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
