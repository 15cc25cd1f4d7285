//! Order entities.

use rust_decimal::Decimal;

use super::value_objects::{OrderStatus, OrderType};
use crate::domain::entity::{Attributes, attribute_entity};

/// An order as returned by `/order/index`.
#[derive(Debug, Clone, Default)]
pub struct Order {
    attributes: Attributes,
}

attribute_entity!(
    Order,
    &[
        ("id", "required|integer|min:1"),
        ("typeId", "integer"),
        ("statusCode", "required|string"),
        ("customerMobile", "string|max:20"),
        ("customerEmail", "email"),
        ("calcTotalMoney", "numeric|min:0"),
        ("createdDateTime", "date_format:Y-m-d H:i:s"),
        ("products.*.productId", "required"),
        ("products.*.quantity", "required|numeric|min:0"),
        ("products.*.price", "numeric|min:0"),
    ]
);

impl Order {
    /// Nhanh order id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.attributes.int("id")
    }

    /// Order id assigned by the shop's own system.
    #[must_use]
    pub fn shop_order_id(&self) -> Option<String> {
        self.attributes.opt_string("shopOrderId")
    }

    /// Fulfilment type; `None` when absent.
    #[must_use]
    pub fn order_type(&self) -> Option<OrderType> {
        self.attributes.opt_int("typeId").map(OrderType::from_code)
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        OrderStatus::from_code(&self.attributes.string("statusCode"))
    }

    /// Customer name.
    #[must_use]
    pub fn customer_name(&self) -> String {
        self.attributes.string("customerName")
    }

    /// Customer mobile number.
    #[must_use]
    pub fn customer_mobile(&self) -> Option<String> {
        self.attributes.opt_string("customerMobile")
    }

    /// Delivery address.
    #[must_use]
    pub fn customer_address(&self) -> Option<String> {
        self.attributes.opt_string("customerAddress")
    }

    /// Carrier id, when shipped.
    #[must_use]
    pub fn carrier_id(&self) -> Option<i64> {
        self.attributes.opt_int("carrierId")
    }

    /// Shipping fee charged.
    #[must_use]
    pub fn ship_fee(&self) -> Decimal {
        self.attributes.decimal("shipFee")
    }

    /// Order total as computed by Nhanh.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.attributes.decimal("calcTotalMoney")
    }

    /// Creation time (`Y-m-d H:i:s`).
    #[must_use]
    pub fn created_at(&self) -> Option<String> {
        self.attributes.opt_string("createdDateTime")
    }

    /// Line items.
    #[must_use]
    pub fn lines(&self) -> Vec<OrderLine> {
        self.attributes
            .children("products")
            .into_iter()
            .map(|attributes| OrderLine { attributes })
            .collect()
    }
}

/// One product line of an [`Order`].
#[derive(Debug, Clone, Default)]
pub struct OrderLine {
    attributes: Attributes,
}

attribute_entity!(
    OrderLine,
    &[
        ("productId", "required"),
        ("quantity", "required|numeric|min:0"),
        ("price", "numeric|min:0"),
    ]
);

impl OrderLine {
    /// Nhanh product id.
    #[must_use]
    pub fn product_id(&self) -> i64 {
        self.attributes.int("productId")
    }

    /// Product name at time of sale.
    #[must_use]
    pub fn product_name(&self) -> String {
        self.attributes.string("productName")
    }

    /// Quantity sold.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.attributes.decimal("quantity")
    }

    /// Unit price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.attributes.decimal("price")
    }

    /// Discount applied to the line.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.attributes.decimal("discount")
    }

    /// `price * quantity - discount`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price() * self.quantity() - self.discount()
    }
}

/// Result of `/order/add` or `/order/update`.
#[derive(Debug, Clone, Default)]
pub struct OrderReceipt {
    attributes: Attributes,
}

attribute_entity!(OrderReceipt, &[("orderId", "required|integer|min:1")]);

impl OrderReceipt {
    /// Nhanh order id.
    #[must_use]
    pub fn order_id(&self) -> i64 {
        self.attributes.int("orderId")
    }

    /// Status after the call, when reported.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        self.attributes
            .opt_string("status")
            .map(|code| OrderStatus::from_code(&code))
    }

    /// Carrier tracking link, when reported.
    #[must_use]
    pub fn tracking_url(&self) -> Option<String> {
        self.attributes.opt_string("trackingUrl")
    }
}
