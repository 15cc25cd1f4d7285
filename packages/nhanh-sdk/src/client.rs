//! Client facade.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CachePort, NhanhApiPort, NoOpCache};
use crate::application::services::{
    CustomerService, OrderService, ProductService, ShippingService,
};
use crate::config::NhanhConfig;
use crate::error::NhanhError;
use crate::infrastructure::cache::InMemoryCache;
use crate::infrastructure::http::NhanhHttpClient;

/// Entry point bundling one service per API resource over a shared
/// transport and cache.
///
/// ```rust,ignore
/// use nhanh_sdk::{NhanhClient, config::load_config};
/// use nhanh_sdk::domain::customer::CustomerSearchRequest;
///
/// let client = NhanhClient::new(&load_config(None)?)?;
/// let page = client.customers().search(&CustomerSearchRequest::paged(1, 20)).await?;
/// ```
pub struct NhanhClient<A: NhanhApiPort + ?Sized = NhanhHttpClient> {
    cache: Arc<dyn CachePort>,
    customers: CustomerService<A>,
    orders: OrderService<A>,
    products: ProductService<A>,
    shipping: ShippingService<A>,
}

impl NhanhClient {
    /// Build the HTTP transport and cache from config.
    pub fn new(config: &NhanhConfig) -> Result<Self, NhanhError> {
        let api = Arc::new(NhanhHttpClient::new(&config.api)?);
        let cache: Arc<dyn CachePort> = if config.cache.enabled {
            Arc::new(InMemoryCache::new())
        } else {
            Arc::new(NoOpCache)
        };

        tracing::info!(
            base_url = %config.api.base_url,
            business_id = %config.api.business_id,
            cache_enabled = config.cache.enabled,
            "Nhanh client created"
        );

        Ok(Self::with_api(api, cache, config.cache.ttl()))
    }
}

impl<A: NhanhApiPort + ?Sized> NhanhClient<A> {
    /// Assemble over any transport and cache.
    pub fn with_api(api: Arc<A>, cache: Arc<dyn CachePort>, ttl: Duration) -> Self {
        Self {
            customers: CustomerService::new(Arc::clone(&api)),
            orders: OrderService::new(Arc::clone(&api)),
            products: ProductService::new(Arc::clone(&api), Arc::clone(&cache), ttl),
            shipping: ShippingService::new(api, Arc::clone(&cache), ttl),
            cache,
        }
    }

    /// Customer resource.
    pub const fn customers(&self) -> &CustomerService<A> {
        &self.customers
    }

    /// Order resource.
    pub const fn orders(&self) -> &OrderService<A> {
        &self.orders
    }

    /// Product resource.
    pub const fn products(&self) -> &ProductService<A> {
        &self.products
    }

    /// Shipping resource.
    pub const fn shipping(&self) -> &ShippingService<A> {
        &self.shipping
    }

    /// Shared response cache.
    pub fn cache(&self) -> &dyn CachePort {
        self.cache.as_ref()
    }
}
