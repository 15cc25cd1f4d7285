//! Infrastructure Layer
//!
//! Adapters implementing the application ports.
//!
//! - `http`: multipart transport for the Nhanh REST API
//! - `oauth`: access-code exchange and consent URL
//! - `cache`: in-memory TTL cache

pub mod cache;
pub mod http;
pub mod oauth;
