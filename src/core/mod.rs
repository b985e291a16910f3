pub mod cart_store;
pub mod provider;

pub use crate::domain::messages::{CartOperation, Locale, Messages};
pub use crate::domain::model::{Cart, CartItem, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, Notifier, ProductCatalog};
pub use crate::utils::error::Result;
