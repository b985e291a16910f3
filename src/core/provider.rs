use crate::core::cart_store::{CartStore, StoreOptions};
use crate::core::{Cart, KeyValueStore, Notifier, ProductCatalog, ProductId, UpdateProductAmount};
use crate::utils::error::{CartError, Result};
use std::sync::{Arc, Weak};

enum ProviderState<C, S, N> {
    Active(Arc<CartStore<C, S, N>>),
    Disposed,
}

/// Owns the single cart store shared by everything below it.
///
/// Lifecycle is `init -> active -> disposed`. Consumers hold [`CartHandle`]s,
/// which stop working once the provider is disposed.
pub struct CartProvider<C, S, N> {
    state: ProviderState<C, S, N>,
}

impl<C, S, N> CartProvider<C, S, N>
where
    C: ProductCatalog,
    S: KeyValueStore,
    N: Notifier,
{
    pub fn init(catalog: C, storage: S, notifier: N, options: StoreOptions) -> Self {
        tracing::debug!("Initializing cart provider");
        Self::from_store(CartStore::load(catalog, storage, notifier, options))
    }
}

impl<C, S, N> CartProvider<C, S, N> {
    pub fn from_store(store: CartStore<C, S, N>) -> Self {
        Self {
            state: ProviderState::Active(Arc::new(store)),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ProviderState::Active(_))
    }

    pub fn handle(&self) -> Result<CartHandle<C, S, N>> {
        match &self.state {
            ProviderState::Active(store) => Ok(CartHandle {
                store: Arc::downgrade(store),
            }),
            ProviderState::Disposed => Err(CartError::ProviderDisposed),
        }
    }

    /// Drops the store. Operations already running on an upgraded handle finish first.
    pub fn dispose(&mut self) {
        if self.is_active() {
            tracing::debug!("Disposing cart provider");
        }
        self.state = ProviderState::Disposed;
    }
}

/// Accessor for code that may or may not run inside a provider's scope.
pub fn use_cart<C, S, N>(provider: Option<&CartProvider<C, S, N>>) -> Result<CartHandle<C, S, N>> {
    provider.ok_or(CartError::OutsideProvider)?.handle()
}

/// Cheap reference to the provider's store.
pub struct CartHandle<C, S, N> {
    store: Weak<CartStore<C, S, N>>,
}

impl<C, S, N> Clone for CartHandle<C, S, N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<C, S, N> CartHandle<C, S, N> {
    pub fn store(&self) -> Result<Arc<CartStore<C, S, N>>> {
        self.store.upgrade().ok_or(CartError::ProviderDisposed)
    }
}

impl<C, S, N> CartHandle<C, S, N>
where
    C: ProductCatalog,
    S: KeyValueStore,
    N: Notifier,
{
    pub async fn cart(&self) -> Result<Cart> {
        Ok(self.store()?.cart().await)
    }

    pub async fn add_product(&self, product_id: ProductId) -> Result<()> {
        self.store()?.add_product(product_id).await;
        Ok(())
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Result<()> {
        self.store()?.remove_product(product_id).await;
        Ok(())
    }

    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> Result<()> {
        self.store()?.update_product_amount(request).await;
        Ok(())
    }
}
