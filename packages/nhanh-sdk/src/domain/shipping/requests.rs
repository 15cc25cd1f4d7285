//! Shipping request DTOs.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::ApiRequest;
use crate::domain::validation::RuleTable;

/// Level of an administrative area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationType {
    /// Province or city.
    City,
    /// District within a city.
    District,
    /// Ward within a district.
    Ward,
}

impl LocationType {
    /// Wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "CITY",
            Self::District => "DISTRICT",
            Self::Ward => "WARD",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `/shipping/carrier`; takes no filters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CarrierRequest;

impl ApiRequest for CarrierRequest {
    const ENDPOINT: &'static str = "/shipping/carrier";
    const RULES: RuleTable = &[];
}

/// Body of `/shipping/location`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    /// Level to list.
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Enclosing area; required below city level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl LocationRequest {
    /// List areas of one level under an optional parent.
    #[must_use]
    pub const fn new(location_type: LocationType, parent_id: Option<i64>) -> Self {
        Self {
            location_type,
            parent_id,
        }
    }
}

impl ApiRequest for LocationRequest {
    const ENDPOINT: &'static str = "/shipping/location";
    const RULES: RuleTable = &[
        ("type", "required|in:CITY,DISTRICT,WARD"),
        ("parentId", "integer|min:1"),
    ];
}

/// Body of `/shipping/fee`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFeeRequest {
    /// Restrict quotes to these carriers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub carrier_ids: Vec<i64>,
    /// Sender city name.
    pub from_city_name: String,
    /// Sender district name.
    pub from_district_name: String,
    /// Recipient city name.
    pub to_city_name: String,
    /// Recipient district name.
    pub to_district_name: String,
    /// Amount to collect on delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_money: Option<Decimal>,
    /// Declared value of the parcel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Weight in grams.
    pub shipping_weight: i64,
    /// Length in centimetres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    /// Width in centimetres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    /// Height in centimetres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

impl ApiRequest for ShippingFeeRequest {
    const ENDPOINT: &'static str = "/shipping/fee";
    const RULES: RuleTable = &[
        ("carrierIds", "array"),
        ("fromCityName", "required|string|max:255"),
        ("fromDistrictName", "required|string|max:255"),
        ("toCityName", "required|string|max:255"),
        ("toDistrictName", "required|string|max:255"),
        ("codMoney", "numeric|min:0"),
        ("price", "numeric|min:0"),
        ("shippingWeight", "required|integer|min:1"),
        ("length", "integer|min:0"),
        ("width", "integer|min:0"),
        ("height", "integer|min:0"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route() -> ShippingFeeRequest {
        ShippingFeeRequest {
            from_city_name: "Hà Nội".to_string(),
            from_district_name: "Cầu Giấy".to_string(),
            to_city_name: "Hồ Chí Minh".to_string(),
            to_district_name: "Quận 1".to_string(),
            shipping_weight: 500,
            ..ShippingFeeRequest::default()
        }
    }

    #[test]
    fn complete_route_is_valid() {
        assert!(route().is_valid());
    }

    #[test]
    fn zero_weight_is_required() {
        let request = ShippingFeeRequest {
            shipping_weight: 0,
            ..route()
        };
        assert_eq!(
            request.errors().first("shippingWeight"),
            Some("The shippingWeight must be at least 1.")
        );
    }

    #[test]
    fn missing_route_fields() {
        let errors = ShippingFeeRequest::default().errors();
        for field in ["fromCityName", "fromDistrictName", "toCityName", "toDistrictName"] {
            assert!(errors.has(field), "{field}");
        }
    }

    #[test]
    fn location_payload() {
        let request = LocationRequest::new(LocationType::District, Some(254));
        assert_eq!(
            request.to_payload().unwrap(),
            json!({ "type": "DISTRICT", "parentId": 254 })
        );
        assert!(request.is_valid());
    }
}
