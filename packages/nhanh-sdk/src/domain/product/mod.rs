//! Product resource: entities, category tree and request DTOs.

mod entity;
mod requests;

pub use entity::{Product, ProductCategory, ProductIdMapping, ProductStatus};
pub use requests::{
    NewProduct, ProductAddRequest, ProductCategoryRequest, ProductDetailRequest,
    ProductSearchRequest,
};
