//! Shipping resource: carriers, locations and fee quotes.

mod entity;
mod requests;

pub use entity::{Location, ShippingCarrier, ShippingFee, ShippingFeeList};
pub use requests::{CarrierRequest, LocationRequest, LocationType, ShippingFeeRequest};
