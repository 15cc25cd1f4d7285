//! Shipping entities.

use rust_decimal::Decimal;

use crate::domain::entity::{Attributes, attribute_entity};

/// A carrier and the services it offers.
#[derive(Debug, Clone, Default)]
pub struct ShippingCarrier {
    attributes: Attributes,
}

attribute_entity!(
    ShippingCarrier,
    &[
        ("id", "required|integer|min:1"),
        ("name", "required|string"),
        ("services.*.id", "required|integer|min:1"),
        ("services.*.name", "required|string"),
    ]
);

impl ShippingCarrier {
    /// Carrier id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.attributes.int("id")
    }

    /// Carrier name.
    #[must_use]
    pub fn name(&self) -> String {
        self.attributes.string("name")
    }

    /// Logo URL.
    #[must_use]
    pub fn logo(&self) -> Option<String> {
        self.attributes.opt_string("logo")
    }

    /// Services as `(id, name)` pairs.
    #[must_use]
    pub fn services(&self) -> Vec<(i64, String)> {
        self.attributes
            .children("services")
            .into_iter()
            .map(|service| (service.int("id"), service.string("name")))
            .collect()
    }
}

/// An administrative area (city, district or ward).
#[derive(Debug, Clone, Default)]
pub struct Location {
    attributes: Attributes,
}

attribute_entity!(
    Location,
    &[
        ("id", "required|integer|min:1"),
        ("name", "required|string|max:255"),
        ("parentId", "integer"),
    ]
);

impl Location {
    /// Location id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.attributes.int("id")
    }

    /// Location name.
    #[must_use]
    pub fn name(&self) -> String {
        self.attributes.string("name")
    }

    /// Enclosing location; `None` for cities.
    #[must_use]
    pub fn parent_id(&self) -> Option<i64> {
        self.attributes.opt_int("parentId").filter(|id| *id > 0)
    }
}

/// One quote returned by `/shipping/fee`.
#[derive(Debug, Clone, Default)]
pub struct ShippingFee {
    attributes: Attributes,
}

attribute_entity!(
    ShippingFee,
    &[
        ("carrierId", "required|integer"),
        ("shipFee", "required|numeric|min:0"),
        ("codFee", "numeric|min:0"),
        ("declaredFee", "numeric|min:0"),
    ]
);

impl ShippingFee {
    /// Carrier id.
    #[must_use]
    pub fn carrier_id(&self) -> i64 {
        self.attributes.int("carrierId")
    }

    /// Carrier name.
    #[must_use]
    pub fn carrier_name(&self) -> String {
        self.attributes.string("carrierName")
    }

    /// Carrier service id.
    #[must_use]
    pub fn service_id(&self) -> Option<i64> {
        self.attributes.opt_int("serviceId")
    }

    /// Carrier service name.
    #[must_use]
    pub fn service_name(&self) -> String {
        self.attributes.string("serviceName")
    }

    /// Base shipping fee.
    #[must_use]
    pub fn ship_fee(&self) -> Decimal {
        self.attributes.decimal("shipFee")
    }

    /// Cash-on-delivery fee.
    #[must_use]
    pub fn cod_fee(&self) -> Decimal {
        self.attributes.decimal("codFee")
    }

    /// Insurance fee on the declared value.
    #[must_use]
    pub fn declared_fee(&self) -> Decimal {
        self.attributes.decimal("declaredFee")
    }

    /// Sum of all fees.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.ship_fee() + self.cod_fee() + self.declared_fee()
    }
}

/// The whole `/shipping/fee` response, checked before quotes are handed out.
#[derive(Debug, Clone, Default)]
pub struct ShippingFeeList {
    attributes: Attributes,
}

attribute_entity!(
    ShippingFeeList,
    &[
        ("services", "array"),
        ("services.*.carrierId", "required"),
        ("services.*.shipFee", "required|numeric|min:0"),
    ]
);

impl ShippingFeeList {
    /// Quotes, cheapest first.
    #[must_use]
    pub fn fees(&self) -> Vec<ShippingFee> {
        let mut fees: Vec<ShippingFee> = self
            .attributes
            .children("services")
            .into_iter()
            .map(|attributes| ShippingFee { attributes })
            .collect();
        fees.sort_by_key(ShippingFee::total);
        fees
    }
}
