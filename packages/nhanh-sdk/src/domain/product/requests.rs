//! Product request DTOs.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::ApiRequest;
use crate::domain::validation::RuleTable;

/// Filters for `/product/search`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchRequest {
    /// Page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Items per page (1..=100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icpp: Option<i64>,
    /// Name contains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Listing status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Minimum retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<Decimal>,
    /// Maximum retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to: Option<Decimal>,
}

impl ProductSearchRequest {
    /// Search a given page with a page size.
    #[must_use]
    pub fn paged(page: i64, icpp: i64) -> Self {
        Self {
            page: Some(page),
            icpp: Some(icpp),
            ..Self::default()
        }
    }

    /// Search by name.
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl ApiRequest for ProductSearchRequest {
    const ENDPOINT: &'static str = "/product/search";
    const RULES: RuleTable = &[
        ("page", "integer|min:1"),
        ("icpp", "integer|between:1,100"),
        ("name", "string|max:255"),
        ("categoryId", "integer|min:1"),
        ("status", "in:New,Active,Inactive,OutOfStock"),
        ("priceFrom", "numeric|min:0"),
        ("priceTo", "numeric|min:0"),
    ];
}

/// Body of `/product/detail`; the endpoint takes the bare Nhanh id.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct ProductDetailRequest {
    /// Nhanh product id.
    pub id: i64,
}

impl ApiRequest for ProductDetailRequest {
    const ENDPOINT: &'static str = "/product/detail";
    const RULES: RuleTable = &[("", "required|integer|min:1")];
}

/// Body of `/product/category`; takes no filters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProductCategoryRequest;

impl ApiRequest for ProductCategoryRequest {
    const ENDPOINT: &'static str = "/product/category";
    const RULES: RuleTable = &[];
}

/// One product to create or update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product id in the shop's own system.
    pub id: String,
    /// Nhanh id, when updating an existing product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_nhanh: Option<i64>,
    /// Product name.
    pub name: String,
    /// SKU code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Retail price.
    pub price: Decimal,
    /// Import (cost) price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_price: Option<Decimal>,
    /// Wholesale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale_price: Option<Decimal>,
    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Listing status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Shipping weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_weight: Option<i64>,
}

impl NewProduct {
    /// Product with the mandatory fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            ..Self::default()
        }
    }
}

/// Batch body for `/product/add`, sent as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ProductAddRequest {
    /// Products to create.
    pub products: Vec<NewProduct>,
}

impl ProductAddRequest {
    /// Batch of products.
    #[must_use]
    pub const fn new(products: Vec<NewProduct>) -> Self {
        Self { products }
    }
}

impl ApiRequest for ProductAddRequest {
    const ENDPOINT: &'static str = "/product/add";
    const RULES: RuleTable = &[
        ("", "required|array"),
        ("*.id", "required|string|max:36"),
        ("*.idNhanh", "integer|min:1"),
        ("*.name", "required|string|max:255"),
        ("*.code", "string|max:255"),
        ("*.barcode", "string|max:255"),
        ("*.price", "required|numeric|min:0"),
        ("*.importPrice", "numeric|min:0"),
        ("*.wholesalePrice", "numeric|min:0"),
        ("*.categoryId", "integer|min:1"),
        ("*.status", "in:New,Active,Inactive,OutOfStock"),
        ("*.shippingWeight", "integer|min:0"),
    ];
}
