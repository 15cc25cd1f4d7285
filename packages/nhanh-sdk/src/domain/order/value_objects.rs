//! Order enumerations.

use std::fmt;

use serde::{Serialize, Serializer};

/// How the order is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// Delivered by a carrier.
    Shipping,
    /// Sold at the counter.
    Shopping,
    /// Reserved ahead of stock.
    PreOrder,
    /// Code not known to this SDK.
    Unknown(i64),
}

impl OrderType {
    /// Decode the numeric `typeId`.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Shipping,
            2 => Self::Shopping,
            3 => Self::PreOrder,
            other => Self::Unknown(other),
        }
    }

    /// Numeric `typeId`.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Shipping => 1,
            Self::Shopping => 2,
            Self::PreOrder => 3,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shipping => write!(f, "SHIPPING"),
            Self::Shopping => write!(f, "SHOPPING"),
            Self::PreOrder => write!(f, "PRE_ORDER"),
            Self::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

impl Serialize for OrderType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Order lifecycle status as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Just created.
    New,
    /// Awaiting shop confirmation.
    Confirming,
    /// Awaiting customer confirmation.
    CustomerConfirming,
    /// Confirmed by the shop.
    Confirmed,
    /// Being packed.
    Packing,
    /// Packed, waiting for pickup.
    Packed,
    /// Moved to another depot.
    ChangeDepot,
    /// Picked up by the carrier.
    Pickup,
    /// In transit.
    Shipping,
    /// Delivered.
    Success,
    /// Delivery failed.
    Failed,
    /// Canceled by the customer.
    Canceled,
    /// Aborted by the shop.
    Aborted,
    /// Canceled by the carrier.
    CarrierCanceled,
    /// Out of stock.
    SoldOut,
    /// Being returned.
    Returning,
    /// Returned to the shop.
    Returned,
    /// Status not known to this SDK.
    Unknown(String),
}

/// Status codes accepted by `/order/update`.
pub const UPDATABLE_STATUSES: &str =
    "in:Confirming,CustomerConfirming,Confirmed,Packing,ChangeDepot,Canceled,Aborted";

impl OrderStatus {
    /// Decode the status code string.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "New" => Self::New,
            "Confirming" => Self::Confirming,
            "CustomerConfirming" => Self::CustomerConfirming,
            "Confirmed" => Self::Confirmed,
            "Packing" => Self::Packing,
            "Packed" => Self::Packed,
            "ChangeDepot" => Self::ChangeDepot,
            "Pickup" => Self::Pickup,
            "Shipping" => Self::Shipping,
            "Success" => Self::Success,
            "Failed" => Self::Failed,
            "Canceled" => Self::Canceled,
            "Aborted" => Self::Aborted,
            "CarrierCanceled" => Self::CarrierCanceled,
            "SoldOut" => Self::SoldOut,
            "Returning" => Self::Returning,
            "Returned" => Self::Returned,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Status code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Confirming => "Confirming",
            Self::CustomerConfirming => "CustomerConfirming",
            Self::Confirmed => "Confirmed",
            Self::Packing => "Packing",
            Self::Packed => "Packed",
            Self::ChangeDepot => "ChangeDepot",
            Self::Pickup => "Pickup",
            Self::Shipping => "Shipping",
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Canceled => "Canceled",
            Self::Aborted => "Aborted",
            Self::CarrierCanceled => "CarrierCanceled",
            Self::SoldOut => "SoldOut",
            Self::Returning => "Returning",
            Self::Returned => "Returned",
            Self::Unknown(code) => code,
        }
    }

    /// Whether the order can no longer change.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Success
                | Self::Failed
                | Self::Canceled
                | Self::Aborted
                | Self::CarrierCanceled
                | Self::SoldOut
                | Self::Returned
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_codes() {
        assert_eq!(OrderType::from_code(1), OrderType::Shipping);
        assert_eq!(OrderType::from_code(3), OrderType::PreOrder);
        assert_eq!(OrderType::from_code(14), OrderType::Unknown(14));
        assert_eq!(OrderType::Shopping.code(), 2);
    }

    #[test]
    fn status_round_trips_codes() {
        for code in ["New", "Packing", "CarrierCanceled", "Returned"] {
            assert_eq!(OrderStatus::from_code(code).as_str(), code);
        }
        assert_eq!(
            OrderStatus::from_code("Teleported"),
            OrderStatus::Unknown("Teleported".to_string())
        );
    }

    #[test]
    fn terminal_statuses() {
        assert!(OrderStatus::Success.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::Shipping.is_terminal());
        assert!(!OrderStatus::Unknown("X".to_string()).is_terminal());
    }

    #[test]
    fn status_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"Confirmed\""
        );
    }
}
