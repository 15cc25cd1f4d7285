//! Order request DTOs.

use rust_decimal::Decimal;
use serde::Serialize;

use super::value_objects::{OrderStatus, OrderType, UPDATABLE_STATUSES};
use crate::domain::shared::ApiRequest;
use crate::domain::validation::RuleTable;

/// Filters for `/order/index`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchRequest {
    /// Page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Items per page (1..=100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icpp: Option<i64>,
    /// Exact Nhanh order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Customer mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_mobile: Option<String>,
    /// Created on or after (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    /// Created on or before (`Y-m-d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    /// Restrict to these statuses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<OrderStatus>,
    /// Fulfilment type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
}

impl OrderSearchRequest {
    /// Orders created within a date range (`Y-m-d`).
    #[must_use]
    pub fn between(from_date: impl Into<String>, to_date: impl Into<String>) -> Self {
        Self {
            from_date: Some(from_date.into()),
            to_date: Some(to_date.into()),
            ..Self::default()
        }
    }

    /// Look up one order.
    #[must_use]
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

impl ApiRequest for OrderSearchRequest {
    const ENDPOINT: &'static str = "/order/index";
    const RULES: RuleTable = &[
        ("page", "integer|min:1"),
        ("icpp", "integer|between:1,100"),
        ("id", "integer|min:1"),
        ("customerMobile", "string|max:20"),
        ("fromDate", "date_format:Y-m-d"),
        ("toDate", "date_format:Y-m-d"),
        ("statuses", "array"),
        ("type", "integer|in:1,2,3"),
    ];
}

/// Gift attached to an order line.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGift {
    /// Shop product id of the gift.
    pub id: String,
    /// Gift quantity.
    pub quantity: i64,
}

/// One product line of a new order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    /// Shop product id.
    pub id: String,
    /// Nhanh product id, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_nhanh: Option<i64>,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price.
    pub price: Decimal,
    /// Line discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    /// Free items attached to the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gifts: Vec<OrderGift>,
}

impl OrderLineInput {
    /// Line with a product id, quantity and unit price.
    #[must_use]
    pub fn new(id: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            id: id.into(),
            quantity,
            price,
            ..Self::default()
        }
    }
}

/// Body of `/order/add`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddRequest {
    /// Order id in the shop's own system.
    pub id: String,
    /// Depot to fulfil from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot_id: Option<i64>,
    /// `Shipping` or `Shopping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Customer name.
    pub customer_name: String,
    /// Customer mobile number.
    pub customer_mobile: String,
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    /// Delivery city name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_city_name: Option<String>,
    /// Delivery district name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_district_name: Option<String>,
    /// Delivery ward name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ward_location_name: Option<String>,
    /// Order-level discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_discount: Option<Decimal>,
    /// Amount already paid by transfer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_transfer: Option<Decimal>,
    /// Preferred carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<i64>,
    /// Preferred carrier service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_service_id: Option<i64>,
    /// Note for the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Line items.
    pub product_list: Vec<OrderLineInput>,
}

impl ApiRequest for OrderAddRequest {
    const ENDPOINT: &'static str = "/order/add";
    const RULES: RuleTable = &[
        ("id", "required|string|max:36"),
        ("depotId", "integer|min:1"),
        ("type", "in:Shipping,Shopping"),
        ("customerName", "required|string|max:255"),
        ("customerMobile", "required|string|max:20"),
        ("customerEmail", "email"),
        ("customerAddress", "string|max:255"),
        ("moneyDiscount", "numeric|min:0"),
        ("moneyTransfer", "numeric|min:0"),
        ("carrierId", "integer|min:1"),
        ("carrierServiceId", "integer|min:1"),
        ("productList", "required|array"),
        ("productList.*.id", "required|string"),
        ("productList.*.idNhanh", "integer|min:1"),
        ("productList.*.quantity", "required|integer|min:1"),
        ("productList.*.price", "required|numeric|min:0"),
        ("productList.*.discount", "numeric|min:0"),
        ("productList.*.gifts.*.id", "required|string"),
        ("productList.*.gifts.*.quantity", "required|integer|min:1"),
    ];
}

/// Body of `/order/update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateRequest {
    /// Nhanh order id.
    pub order_id: i64,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Amount paid by transfer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_transfer: Option<Decimal>,
    /// Payment method code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Internal note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_description: Option<String>,
}

impl OrderUpdateRequest {
    /// Move an order to a new status.
    #[must_use]
    pub fn status(order_id: i64, status: OrderStatus) -> Self {
        Self {
            order_id,
            status: Some(status),
            ..Self::default()
        }
    }
}

impl ApiRequest for OrderUpdateRequest {
    const ENDPOINT: &'static str = "/order/update";
    const RULES: RuleTable = &[
        ("orderId", "required|integer|min:1"),
        ("status", UPDATABLE_STATUSES),
        ("moneyTransfer", "numeric|min:0"),
        ("paymentMethod", "string|max:50"),
        ("privateDescription", "string|max:1000"),
    ];
}
