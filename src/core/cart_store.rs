use crate::core::{
    Cart, CartItem, CartOperation, KeyValueStore, Messages, Notifier, ProductCatalog, ProductId,
    Stock, UpdateProductAmount,
};
use crate::utils::error::{CartError, Result};
use tokio::sync::Mutex;

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub storage_key: String,
    pub messages: Messages,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            messages: Messages::default(),
        }
    }
}

/// Cart state plus the three mutating operations.
///
/// Each operation holds the cart lock from its first read until the commit,
/// so concurrent calls are applied one after another instead of overwriting
/// each other. A commit writes the storage first and only then swaps the
/// in-memory cart; a failed write leaves both at the last committed value.
///
/// Operations never return errors. Failures are logged and reported to the
/// notifier with the message configured for that operation.
pub struct CartStore<C, S, N> {
    catalog: C,
    storage: S,
    notifier: N,
    options: StoreOptions,
    cart: Mutex<Cart>,
}

impl<C, S, N> CartStore<C, S, N>
where
    C: ProductCatalog,
    S: KeyValueStore,
    N: Notifier,
{
    /// Restores the persisted cart. Missing or unreadable data yields an empty cart.
    pub fn load(catalog: C, storage: S, notifier: N, options: StoreOptions) -> Self {
        let cart = restore_cart(&storage, &options.storage_key);
        tracing::debug!(
            "Cart restored from '{}' with {} products",
            options.storage_key,
            cart.len()
        );

        Self {
            catalog,
            storage,
            notifier,
            options,
            cart: Mutex::new(cart),
        }
    }

    /// Snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    pub async fn add_product(&self, product_id: ProductId) {
        let mut cart = self.cart.lock().await;
        if let Err(e) = self.try_add_product(&mut cart, product_id).await {
            self.report(CartOperation::Add, product_id, &e);
        }
    }

    /// Never touches the catalog; the call only waits for the cart lock.
    pub async fn remove_product(&self, product_id: ProductId) {
        let mut cart = self.cart.lock().await;
        if let Err(e) = self.try_remove_product(&mut cart, product_id) {
            self.report(CartOperation::Remove, product_id, &e);
        }
    }

    pub async fn update_product_amount(&self, request: UpdateProductAmount) {
        if request.amount < 1 {
            tracing::debug!(
                "Ignoring amount {} for product {}",
                request.amount,
                request.product_id
            );
            return;
        }

        let mut cart = self.cart.lock().await;
        if let Err(e) = self.try_update_product_amount(&mut cart, request).await {
            self.report(CartOperation::UpdateAmount, request.product_id, &e);
        }
    }

    async fn try_add_product(&self, cart: &mut Cart, product_id: ProductId) -> Result<()> {
        let updated = match cart.amount_of(product_id) {
            None => {
                let product = self
                    .catalog
                    .fetch_product(product_id)
                    .await?
                    .ok_or(CartError::ProductNotFound { product_id })?;
                cart.with_added(product)
            }
            Some(current) => {
                let stock = self.fetch_stock(product_id).await?;
                if current >= stock.amount {
                    return Err(CartError::OutOfStock {
                        product_id,
                        requested: i64::from(current) + 1,
                        available: stock.amount,
                    });
                }
                cart.with_amount(product_id, current + 1)
            }
        };

        self.commit(cart, updated)
    }

    fn try_remove_product(&self, cart: &mut Cart, product_id: ProductId) -> Result<()> {
        if !cart.contains(product_id) {
            return Err(CartError::NotInCart { product_id });
        }

        let updated = cart.without(product_id);
        self.commit(cart, updated)
    }

    async fn try_update_product_amount(
        &self,
        cart: &mut Cart,
        request: UpdateProductAmount,
    ) -> Result<()> {
        let UpdateProductAmount { product_id, amount } = request;
        let stock = self.fetch_stock(product_id).await?;

        if amount > i64::from(stock.amount) {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        // 不在購物車內的商品：購物車不變，但仍照常寫回儲存
        if !cart.contains(product_id) {
            tracing::debug!(
                "Product {} is not in the cart; rewriting the unchanged cart",
                product_id
            );
        }

        let amount = u32::try_from(amount).map_err(|_| CartError::OutOfStock {
            product_id,
            requested: amount,
            available: stock.amount,
        })?;
        let updated = cart.with_amount(product_id, amount);
        self.commit(cart, updated)
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock> {
        self.catalog
            .fetch_stock(product_id)
            .await?
            .ok_or(CartError::StockNotFound { product_id })
    }

    fn commit(&self, cart: &mut Cart, updated: Cart) -> Result<()> {
        let payload = serde_json::to_string(&updated)?;
        self.storage.set(&self.options.storage_key, &payload)?;
        tracing::debug!("Cart committed with {} products", updated.len());
        *cart = updated;
        Ok(())
    }

    fn report(&self, operation: CartOperation, product_id: ProductId, error: &CartError) {
        let message = if error.is_out_of_stock() {
            self.options.messages.out_of_stock.as_str()
        } else {
            self.options.messages.failure(operation)
        };

        tracing::warn!(
            "Cart {} failed for product {}: {}",
            operation,
            product_id,
            error
        );
        self.notifier.error(message);
    }
}

fn restore_cart<S: KeyValueStore>(storage: &S, key: &str) -> Cart {
    let payload = match storage.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!("Could not read persisted cart '{}', starting empty: {}", key, e);
            return Cart::new();
        }
    };

    let cart = match serde_json::from_str::<Vec<CartItem>>(&payload) {
        Ok(items) => {
            let cart = Cart::from_items(items.clone());
            if cart.items() == items.as_slice() {
                return cart;
            }
            cart
        }
        Err(e) => {
            tracing::warn!("Persisted cart '{}' is corrupt, starting empty: {}", key, e);
            Cart::new()
        }
    };

    // 修復後的內容寫回，讓儲存與記憶體一致
    let repaired = serde_json::to_string(&cart)
        .map_err(CartError::from)
        .and_then(|payload| storage.set(key, &payload));
    if let Err(e) = repaired {
        tracing::warn!("Could not write recovered cart '{}' back: {}", key, e);
    }
    cart
}
