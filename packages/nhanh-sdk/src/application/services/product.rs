//! Product service.

use std::sync::Arc;
use std::time::Duration;

use super::{dispatch, remember, unwrap_list};
use crate::application::ports::{CachePort, NhanhApiPort};
use crate::domain::entity::{Entity, collect};
use crate::domain::product::{
    Product, ProductAddRequest, ProductCategory, ProductCategoryRequest, ProductDetailRequest,
    ProductIdMapping, ProductSearchRequest,
};
use crate::domain::shared::Page;
use crate::error::NhanhError;

/// One page of `/product/search`.
pub type ProductPage = Page<Product>;

const CATEGORIES_KEY: &str = "product.categories";

/// Product search, detail, creation and the category tree.
pub struct ProductService<A: NhanhApiPort + ?Sized> {
    api: Arc<A>,
    cache: Arc<dyn CachePort>,
    ttl: Duration,
}

impl<A: NhanhApiPort + ?Sized> ProductService<A> {
    /// Create a new `ProductService`.
    pub fn new(api: Arc<A>, cache: Arc<dyn CachePort>, ttl: Duration) -> Self {
        Self { api, cache, ttl }
    }

    /// Search products.
    pub async fn search(&self, request: &ProductSearchRequest) -> Result<ProductPage, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        Ok(Page::from_data(&data, "products"))
    }

    /// Product by Nhanh id.
    pub async fn detail(&self, id: i64) -> Result<Option<Product>, NhanhError> {
        let data = dispatch(self.api.as_ref(), &ProductDetailRequest { id }).await?;
        if data.get("idNhanh").is_some() {
            return Ok(Product::from_value(data));
        }
        let products: Vec<Product> = collect(&data);
        Ok(products.into_iter().find(|product| product.id() == id))
    }

    /// Create or update products; returns the shop id → Nhanh id mapping.
    pub async fn add(&self, request: &ProductAddRequest) -> Result<ProductIdMapping, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        let data = if data.get("ids").is_some() {
            data
        } else {
            serde_json::json!({ "ids": data })
        };
        let mapping = ProductIdMapping::from_value(data).unwrap_or_default();
        mapping
            .validate()
            .map_err(|err| NhanhError::InvalidResponse(format!("product ids: {err}")))?;
        tracing::info!(
            requested = request.products.len(),
            mapped = mapping.len(),
            "Products added"
        );
        Ok(mapping)
    }

    /// Root categories with their subtrees. Cached.
    pub async fn categories(&self) -> Result<Vec<ProductCategory>, NhanhError> {
        let data = remember(self.cache.as_ref(), CATEGORIES_KEY, self.ttl, || {
            dispatch(self.api.as_ref(), &ProductCategoryRequest)
        })
        .await?;
        Ok(collect(unwrap_list(&data, "categories")))
    }

    /// Drop the cached category tree.
    pub fn forget_categories(&self) {
        self.cache.forget(CATEGORIES_KEY);
    }

    /// Every category, flattened depth first.
    pub async fn all_categories(&self) -> Result<Vec<ProductCategory>, NhanhError> {
        Ok(self
            .categories()
            .await?
            .iter()
            .flat_map(ProductCategory::flatten)
            .collect())
    }
}
