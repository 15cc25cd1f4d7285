//! Resource services.
//!
//! Each service validates its request locally, sends it through the
//! [`NhanhApiPort`] and decodes the `data` field into entities. An invalid
//! request never reaches the transport.

mod customer;
mod order;
mod product;
mod shipping;

#[cfg(test)]
pub(crate) mod fake;

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::application::ports::{CachePort, NhanhApiPort};
use crate::domain::shared::ApiRequest;
use crate::error::NhanhError;

pub use customer::{CustomerPage, CustomerService};
pub use order::{OrderPage, OrderService};
pub use product::{ProductPage, ProductService};
pub use shipping::ShippingService;

/// Validate `request`, then send it to its endpoint.
pub(crate) async fn dispatch<A, R>(api: &A, request: &R) -> Result<Value, NhanhError>
where
    A: NhanhApiPort + ?Sized,
    R: ApiRequest + Sync,
{
    if let Err(err) = request.validate() {
        tracing::warn!(
            endpoint = R::ENDPOINT,
            error = %err,
            "Request rejected by local validation"
        );
        return Err(err.into());
    }

    let payload = request.to_payload()?;
    let payload = (!payload.is_null()).then_some(&payload);
    api.call(R::ENDPOINT, payload).await
}

/// Return the cached value under `key`, or fetch and store it.
pub(crate) async fn remember<F, Fut>(
    cache: &dyn CachePort,
    key: &str,
    ttl: Duration,
    fetch: F,
) -> Result<Value, NhanhError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value, NhanhError>>,
{
    if let Some(hit) = cache.get(key) {
        tracing::debug!(key, "Cache hit");
        return Ok(hit);
    }

    let value = fetch().await?;
    tracing::debug!(key, ttl_secs = ttl.as_secs(), "Cache store");
    cache.put(key, value.clone(), ttl);
    Ok(value)
}

/// The list under `key` when `data` wraps it, else `data` itself.
pub(crate) fn unwrap_list<'a>(data: &'a Value, key: &str) -> &'a Value {
    data.get(key).unwrap_or(data)
}

/// Numeric ids from an array (or id-keyed object) of numbers or numeric strings.
pub(crate) fn ids_of(value: &Value) -> Vec<i64> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        other => vec![other],
    };
    items
        .into_iter()
        .filter_map(|id| id.as_i64().or_else(|| id.as_str()?.trim().parse().ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NoOpCache;
    use crate::infrastructure::cache::InMemoryCache;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn remember_fetches_once() {
        let cache = InMemoryCache::new();
        let fetches = AtomicUsize::new(0);
        for _ in 0..3 {
            let value = remember(&cache, "k", Duration::from_secs(60), || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(json!([1, 2]))
            })
            .await
            .unwrap();
            assert_eq!(value, json!([1, 2]));
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn remember_without_cache_always_fetches() {
        let fetches = AtomicUsize::new(0);
        for _ in 0..2 {
            remember(&NoOpCache, "k", Duration::from_secs(60), || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Null)
            })
            .await
            .unwrap();
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn remember_does_not_store_errors() {
        let cache = InMemoryCache::new();
        let result = remember(&cache, "k", Duration::from_secs(60), || async {
            Err(NhanhError::Network("down".to_string()))
        })
        .await;
        assert!(result.is_err());
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        assert_eq!(ids_of(&json!([1, "2", "x"])), vec![1, 2]);
        assert_eq!(ids_of(&json!({ "a": 7 })), vec![7]);
        assert_eq!(ids_of(&json!(9)), vec![9]);
    }

    #[test]
    fn unwrap_list_falls_back_to_data() {
        let wrapped = json!({ "carriers": [1] });
        assert_eq!(unwrap_list(&wrapped, "carriers"), &json!([1]));
        let bare = json!([1]);
        assert_eq!(unwrap_list(&bare, "carriers"), &bare);
    }
}
