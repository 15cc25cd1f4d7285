//! Types shared across resources.

mod page;
mod request;

pub use page::Page;
pub use request::ApiRequest;
