//! Domain layer: validation engine, entity model and per-resource types.
//!
//! Nothing in here performs I/O.

pub mod auth;
pub mod customer;
pub mod entity;
pub mod order;
pub mod product;
pub mod shared;
pub mod shipping;
pub mod validation;
