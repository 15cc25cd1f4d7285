//! Order resource: entities, enumerations and request DTOs.

mod entity;
mod requests;
mod value_objects;

pub use entity::{Order, OrderLine, OrderReceipt};
pub use requests::{
    OrderAddRequest, OrderGift, OrderLineInput, OrderSearchRequest, OrderUpdateRequest,
};
pub use value_objects::{OrderStatus, OrderType, UPDATABLE_STATUSES};
