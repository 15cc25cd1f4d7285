// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Nhanh SDK - Rust client for the Nhanh.vn e-commerce API.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: request DTOs, entities and the rule validator
//!   - `validation`: pipe-delimited rule specs (`required|integer|between:1,50`)
//!   - `entity`: attribute bag with typed getters and a rule table per entity
//!   - `customer`, `order`, `product`, `shipping`, `auth`: per-resource types
//!
//! - **Application**: services and port definitions
//!   - `ports`: `NhanhApiPort` (transport), `CachePort` (reference-data cache)
//!   - `services`: `CustomerService`, `OrderService`, `ProductService`, `ShippingService`
//!
//! - **Infrastructure**: adapters
//!   - `http`: multipart transport and envelope parsing
//!   - `oauth`: consent URL and access-code exchange
//!   - `cache`: in-memory TTL cache
//!
//! Requests are validated locally before they are sent; an invalid request
//! fails with [`NhanhError::Validation`] and never reaches the network.
//! No call is retried automatically.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - types and validation with no I/O.
pub mod domain;

/// Application layer - services and port definitions.
pub mod application;

/// Infrastructure layer - HTTP, OAuth and cache adapters.
pub mod infrastructure;

pub mod client;
pub mod config;
pub mod error;
pub mod telemetry;

pub use client::NhanhClient;
pub use error::{ApiFailure, NhanhError};

// Domain re-exports
pub use domain::auth::AccessToken;
pub use domain::entity::{Attributes, Entity};
pub use domain::shared::{ApiRequest, Page};
pub use domain::validation::{ValidationError, ValidationErrors, Validator};

// Application re-exports
pub use application::ports::{CachePort, NhanhApiPort, NoOpCache};
pub use application::services::{
    CustomerPage, CustomerService, OrderPage, OrderService, ProductPage, ProductService,
    ShippingService,
};

// Infrastructure re-exports
pub use infrastructure::cache::InMemoryCache;
pub use infrastructure::http::NhanhHttpClient;
pub use infrastructure::oauth::OAuthClient;
