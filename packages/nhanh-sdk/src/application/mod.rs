//! Application Layer
//!
//! Orchestrates domain types over the transport:
//!
//! - **Ports**: interfaces for the Nhanh API and the response cache
//! - **Services**: one per API resource

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
