use crate::domain::messages::Locale;
use crate::domain::model::{Product, ProductId, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only product and stock lookups. `Ok(None)` means the record does not
/// exist upstream; `Err` is a transport or decode failure.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_product(&self, product_id: ProductId) -> Result<Option<Product>>;
    async fn fetch_stock(&self, product_id: ProductId) -> Result<Option<Stock>>;
}

/// Synchronous string key-value store used to persist the cart.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// User-visible error sink. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

#[async_trait]
impl<T: ProductCatalog + ?Sized> ProductCatalog for Arc<T> {
    async fn fetch_product(&self, product_id: ProductId) -> Result<Option<Product>> {
        (**self).fetch_product(product_id).await
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Option<Stock>> {
        (**self).fetch_stock(product_id).await
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Settings needed to wire a cart store, from whichever source the binary uses.
pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn storage_dir(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn locale(&self) -> Locale;
    fn request_timeout_seconds(&self) -> u64;
}
