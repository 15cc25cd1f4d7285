//! Customer resource: entity, enumerations and request DTOs.

mod entity;
mod requests;
mod value_objects;

pub use entity::Customer;
pub use requests::{CustomerAddRequest, CustomerSearchRequest, NewCustomer};
pub use value_objects::{CustomerType, Gender};
