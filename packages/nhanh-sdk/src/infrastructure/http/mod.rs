//! HTTP transport for the Nhanh REST API.

mod client;
mod envelope;

pub use client::NhanhHttpClient;
pub(crate) use envelope::read_envelope;
