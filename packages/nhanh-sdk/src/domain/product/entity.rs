//! Product entities.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::domain::entity::{Attributes, attribute_entity};

/// Product listing status.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    /// Created, not yet on sale.
    New,
    /// On sale.
    Active,
    /// Hidden from sale.
    Inactive,
    /// No stock left.
    OutOfStock,
    /// Status not known to this SDK.
    Unknown(String),
}

impl ProductStatus {
    /// Decode the status code string.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "New" => Self::New,
            "Active" => Self::Active,
            "Inactive" => Self::Inactive,
            "OutOfStock" => Self::OutOfStock,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Status code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OutOfStock => "OutOfStock",
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A product as returned by `/product/search` and `/product/detail`.
#[derive(Debug, Clone, Default)]
pub struct Product {
    attributes: Attributes,
}

attribute_entity!(
    Product,
    &[
        ("idNhanh", "required|integer|min:1"),
        ("name", "required|string|max:255"),
        ("code", "string|max:255"),
        ("barcode", "string|max:255"),
        ("price", "numeric|min:0"),
        ("importPrice", "numeric|min:0"),
        ("wholesalePrice", "numeric|min:0"),
        ("status", "in:New,Active,Inactive,OutOfStock"),
        ("categoryId", "integer"),
        ("inventory.remain", "numeric"),
    ]
);

impl Product {
    /// Nhanh product id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.attributes.int("idNhanh")
    }

    /// Shop product id, when set.
    #[must_use]
    pub fn shop_id(&self) -> Option<String> {
        self.attributes.opt_string("id")
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> String {
        self.attributes.string("name")
    }

    /// SKU code.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.attributes.opt_string("code")
    }

    /// Barcode.
    #[must_use]
    pub fn barcode(&self) -> Option<String> {
        self.attributes.opt_string("barcode")
    }

    /// Retail price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.attributes.decimal("price")
    }

    /// Wholesale price.
    #[must_use]
    pub fn wholesale_price(&self) -> Decimal {
        self.attributes.decimal("wholesalePrice")
    }

    /// Import (cost) price.
    #[must_use]
    pub fn import_price(&self) -> Decimal {
        self.attributes.decimal("importPrice")
    }

    /// Listing status; `None` when absent.
    #[must_use]
    pub fn status(&self) -> Option<ProductStatus> {
        self.attributes
            .opt_string("status")
            .map(|code| ProductStatus::from_code(&code))
    }

    /// Category id.
    #[must_use]
    pub fn category_id(&self) -> Option<i64> {
        self.attributes.opt_int("categoryId")
    }

    /// Units on hand across depots.
    #[must_use]
    pub fn stock_remain(&self) -> i64 {
        self.attributes.int("inventory.remain")
    }

    /// Units available to sell across depots.
    #[must_use]
    pub fn stock_available(&self) -> i64 {
        self.attributes.int("inventory.available")
    }

    /// Image URLs.
    #[must_use]
    pub fn images(&self) -> Vec<String> {
        self.attributes
            .list("images")
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect()
    }
}

/// A node of the product category tree.
#[derive(Debug, Clone, Default)]
pub struct ProductCategory {
    attributes: Attributes,
}

attribute_entity!(
    ProductCategory,
    &[
        ("id", "required|integer|min:1"),
        ("name", "required|string|max:255"),
        ("parentId", "integer"),
        ("childs.*.id", "required|integer|min:1"),
        ("childs.*.name", "required|string"),
    ]
);

impl ProductCategory {
    /// Category id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.attributes.int("id")
    }

    /// Parent category id; `None` at the root.
    #[must_use]
    pub fn parent_id(&self) -> Option<i64> {
        self.attributes.opt_int("parentId").filter(|id| *id > 0)
    }

    /// Category name.
    #[must_use]
    pub fn name(&self) -> String {
        self.attributes.string("name")
    }

    /// Category code.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.attributes.opt_string("code")
    }

    /// Direct children.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.attributes
            .children("childs")
            .into_iter()
            .map(|attributes| Self { attributes })
            .collect()
    }

    /// This category and all descendants, depth first.
    #[must_use]
    pub fn flatten(&self) -> Vec<Self> {
        let mut out = vec![self.clone()];
        for child in self.children() {
            out.extend(child.flatten());
        }
        out
    }
}

/// Id mapping returned by `/product/add`.
#[derive(Debug, Clone, Default)]
pub struct ProductIdMapping {
    attributes: Attributes,
}

attribute_entity!(ProductIdMapping, &[("ids", "required|array")]);

impl ProductIdMapping {
    /// Nhanh id assigned to a shop product id.
    #[must_use]
    pub fn nhanh_id(&self, shop_id: &str) -> Option<i64> {
        self.attributes.as_map().get("ids").and_then(|ids| {
            ids.get(shop_id)
                .and_then(|value| value.as_i64().or_else(|| value.as_str()?.parse().ok()))
        })
    }

    /// Number of mapped products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.list("ids").len()
    }

    /// Whether nothing was mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
