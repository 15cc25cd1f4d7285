//! Customer request DTOs.

use serde::Serialize;

use super::value_objects::{CustomerType, Gender};
use crate::domain::shared::ApiRequest;
use crate::domain::validation::RuleTable;

/// Filters for `/customer/search`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSearchRequest {
    /// Page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Items per page (1..=50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icpp: Option<i64>,
    /// Exact customer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Customer classification.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    /// Last purchase on or after (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_bought_date_from: Option<String>,
    /// Last purchase on or before (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_bought_date_to: Option<String>,
    /// Updated on or after (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_from: Option<String>,
    /// Updated on or before (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_to: Option<String>,
}

impl CustomerSearchRequest {
    /// Search a given page with a page size.
    #[must_use]
    pub fn paged(page: i64, icpp: i64) -> Self {
        Self {
            page: Some(page),
            icpp: Some(icpp),
            ..Self::default()
        }
    }

    /// Search by mobile number.
    #[must_use]
    pub fn by_mobile(mobile: impl Into<String>) -> Self {
        Self {
            mobile: Some(mobile.into()),
            ..Self::default()
        }
    }

    /// Search by customer id.
    #[must_use]
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

impl ApiRequest for CustomerSearchRequest {
    const ENDPOINT: &'static str = "/customer/search";
    const RULES: RuleTable = &[
        ("page", "integer|min:1"),
        ("icpp", "integer|between:1,50"),
        ("id", "integer|min:1"),
        ("mobile", "string|max:20"),
        ("type", "integer|in:1,2,3"),
        ("lastBoughtDateFrom", "date_format:Y-m-d"),
        ("lastBoughtDateTo", "date_format:Y-m-d"),
        ("updatedAtFrom", "date_format:Y-m-d"),
        ("updatedAtTo", "date_format:Y-m-d"),
    ];
}

/// One customer to create.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Full name.
    pub name: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Classification.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Birthday (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// Opening loyalty points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

impl NewCustomer {
    /// Customer with the two mandatory fields.
    #[must_use]
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            ..Self::default()
        }
    }
}

/// Batch body for `/customer/add`.
///
/// Serializes as a bare JSON array, which is what the endpoint expects.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CustomerAddRequest {
    /// Customers to create.
    pub customers: Vec<NewCustomer>,
}

impl CustomerAddRequest {
    /// Batch of customers.
    #[must_use]
    pub const fn new(customers: Vec<NewCustomer>) -> Self {
        Self { customers }
    }
}

impl ApiRequest for CustomerAddRequest {
    const ENDPOINT: &'static str = "/customer/add";
    const RULES: RuleTable = &[
        ("", "required|array"),
        ("*.name", "required|string|max:255"),
        ("*.mobile", "required|string|max:20"),
        ("*.email", "email|max:255"),
        ("*.type", "integer|in:1,2,3"),
        ("*.gender", "integer|in:1,2"),
        ("*.birthday", "date_format:Y-m-d"),
        ("*.points", "integer|min:0"),
    ];
}
