pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CartCommand, CliConfig};

pub use crate::adapters::{
    CollectingNotifier, ConsoleNotifier, FileStore, HttpCatalog, MemoryStore, TracingNotifier,
};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::cart_store::{CartStore, StoreOptions, DEFAULT_STORAGE_KEY};
pub use crate::core::provider::{use_cart, CartHandle, CartProvider};
pub use crate::domain::messages::{Locale, Messages};
pub use crate::domain::model::{Cart, CartItem, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::utils::error::{CartError, Result};
