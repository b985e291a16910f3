use crate::domain::model::{Product, ProductId, Stock};
use crate::domain::ports::ProductCatalog;
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Product/stock lookups against a REST API exposing `/products/{id}` and
/// `/stock/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_record<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CartError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let record = response.json::<T>().await?;
        Ok(Some(record))
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn fetch_product(&self, product_id: ProductId) -> Result<Option<Product>> {
        self.get_record(&format!("products/{}", product_id)).await
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Option<Stock>> {
        self.get_record(&format!("stock/{}", product_id)).await
    }
}
