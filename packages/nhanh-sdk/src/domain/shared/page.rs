//! Paginated list responses.

use serde_json::Value;

use crate::domain::entity::{Attributes, Entity, collect};

/// One page of a list endpoint.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Current page (1-based).
    pub page: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Total number of records, when the endpoint reports it.
    pub total_records: Option<i64>,
    /// Items on this page.
    pub items: Vec<T>,
}

impl<T: Entity> Page<T> {
    /// Decode a `data` envelope whose items live under `key`.
    ///
    /// Endpoints disagree on naming (`page` vs `currentPage`); both are
    /// accepted. Items may be an array or an object keyed by id.
    #[must_use]
    pub fn from_data(data: &Value, key: &str) -> Self {
        let attributes = Attributes::from_value(data.clone()).unwrap_or_default();
        let page = attributes
            .opt_int("page")
            .or_else(|| attributes.opt_int("currentPage"))
            .unwrap_or(1);
        Self {
            page,
            total_pages: attributes.int("totalPages"),
            total_records: attributes.opt_int("totalRecords"),
            items: attributes.get(key).map(collect).unwrap_or_default(),
        }
    }
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            total_records: None,
            items: Vec::new(),
        }
    }
}
