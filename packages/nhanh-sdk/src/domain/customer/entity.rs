//! Customer entity.

use rust_decimal::Decimal;

use super::value_objects::{CustomerType, Gender};
use crate::domain::entity::{Attributes, attribute_entity};

/// A customer record as returned by `/customer/search`.
#[derive(Debug, Clone, Default)]
pub struct Customer {
    attributes: Attributes,
}

attribute_entity!(
    Customer,
    &[
        ("id", "required|integer|min:1"),
        ("name", "required|string|max:255"),
        ("mobile", "string|max:20"),
        ("email", "email"),
        ("type", "integer|in:1,2,3"),
        ("gender", "integer|in:1,2"),
        ("birthday", "date_format:Y-m-d"),
        ("points", "integer|min:0"),
    ]
);

impl Customer {
    /// Nhanh customer id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.attributes.int("id")
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> String {
        self.attributes.string("name")
    }

    /// Mobile number.
    #[must_use]
    pub fn mobile(&self) -> Option<String> {
        self.attributes.opt_string("mobile")
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.attributes.opt_string("email").filter(|e| !e.is_empty())
    }

    /// Street address.
    #[must_use]
    pub fn address(&self) -> Option<String> {
        self.attributes.opt_string("address")
    }

    /// Customer classification; `None` when the field is absent.
    #[must_use]
    pub fn customer_type(&self) -> Option<CustomerType> {
        self.attributes.opt_int("type").map(CustomerType::from_code)
    }

    /// Gender; `None` when the field is absent.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.attributes.opt_int("gender").map(Gender::from_code)
    }

    /// Birthday as `Y-m-d` text.
    #[must_use]
    pub fn birthday(&self) -> Option<String> {
        self.attributes.opt_string("birthday")
    }

    /// Loyalty points.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.attributes.int("points")
    }

    /// Lifetime spend.
    #[must_use]
    pub fn total_money(&self) -> Decimal {
        self.attributes.decimal("totalMoney")
    }

    /// Date of the most recent purchase.
    #[must_use]
    pub fn last_bought_date(&self) -> Option<String> {
        self.attributes.opt_string("lastBoughtDate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Entity;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn customer(value: serde_json::Value) -> Customer {
        Customer::from_value(value).unwrap()
    }

    #[test]
    fn typed_getters() {
        let c = customer(json!({
            "id": "3021",
            "name": "Nguyễn Văn An",
            "mobile": "0912345678",
            "email": "an@example.vn",
            "type": 2,
            "gender": "1",
            "points": 120,
            "totalMoney": "1250000",
        }));
        assert_eq!(c.id(), 3021);
        assert_eq!(c.name(), "Nguyễn Văn An");
        assert_eq!(c.customer_type(), Some(CustomerType::Wholesale));
        assert_eq!(c.gender(), Some(Gender::Male));
        assert_eq!(c.total_money(), dec!(1250000));
        assert!(c.is_valid());
    }

    #[test]
    fn unknown_codes_decode_defensively() {
        let c = customer(json!({ "id": 1, "name": "X", "type": 7 }));
        assert_eq!(c.customer_type(), Some(CustomerType::Unknown(7)));
        assert!(c.errors().has("type"));
    }

    #[test]
    fn empty_optional_fields_are_accepted() {
        let c = customer(json!({ "id": 1, "name": "X", "email": "", "birthday": null }));
        assert!(c.is_valid());
        assert_eq!(c.email(), None);
    }

    #[test]
    fn invalid_birthday_is_reported() {
        let c = customer(json!({ "id": 1, "name": "X", "birthday": "1990-02-30" }));
        assert_eq!(
            c.errors().first("birthday"),
            Some("The birthday does not match the format Y-m-d.")
        );
    }
}
