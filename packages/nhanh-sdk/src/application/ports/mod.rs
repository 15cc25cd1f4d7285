//! Application Ports (Driven)
//!
//! Interfaces for the external systems the services depend on.

mod api_port;
mod cache_port;

pub use api_port::NhanhApiPort;
pub use cache_port::{CachePort, NoOpCache};
