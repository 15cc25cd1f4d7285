//! Shipping service.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::json;

use super::{dispatch, remember, unwrap_list};
use crate::application::ports::{CachePort, NhanhApiPort};
use crate::domain::entity::{Entity, collect};
use crate::domain::shipping::{
    CarrierRequest, Location, LocationRequest, LocationType, ShippingCarrier, ShippingFee,
    ShippingFeeList, ShippingFeeRequest,
};
use crate::error::NhanhError;

const CARRIERS_KEY: &str = "shipping.carriers";

/// Carriers, administrative locations and fee quotes.
pub struct ShippingService<A: NhanhApiPort + ?Sized> {
    api: Arc<A>,
    cache: Arc<dyn CachePort>,
    ttl: Duration,
    /// Location keys this service has cached, for [`ShippingService::forget`].
    location_keys: Mutex<HashSet<String>>,
}

impl<A: NhanhApiPort + ?Sized> ShippingService<A> {
    /// Create a new `ShippingService`.
    pub fn new(api: Arc<A>, cache: Arc<dyn CachePort>, ttl: Duration) -> Self {
        Self {
            api,
            cache,
            ttl,
            location_keys: Mutex::new(HashSet::new()),
        }
    }

    /// Carriers enabled for the business. Cached.
    pub async fn carriers(&self) -> Result<Vec<ShippingCarrier>, NhanhError> {
        let data = remember(self.cache.as_ref(), CARRIERS_KEY, self.ttl, || {
            dispatch(self.api.as_ref(), &CarrierRequest)
        })
        .await?;
        Ok(collect(unwrap_list(&data, "carriers")))
    }

    /// Areas of one level, optionally under a parent. Cached per level and
    /// parent.
    pub async fn locations(
        &self,
        location_type: LocationType,
        parent_id: Option<i64>,
    ) -> Result<Vec<Location>, NhanhError> {
        let request = LocationRequest::new(location_type, parent_id);
        let key = location_key(location_type, parent_id);
        let data = remember(self.cache.as_ref(), &key, self.ttl, || {
            dispatch(self.api.as_ref(), &request)
        })
        .await?;
        self.location_keys.lock().insert(key);
        Ok(collect(unwrap_list(&data, "locations")))
    }

    /// Fee quotes for a parcel, cheapest first.
    ///
    /// Returns `InvalidResponse` when any quote lacks a carrier or a valid fee.
    pub async fn fee(&self, request: &ShippingFeeRequest) -> Result<Vec<ShippingFee>, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        let data = if data.is_array() {
            json!({ "services": data })
        } else {
            data
        };

        let list = ShippingFeeList::from_value(data).unwrap_or_default();
        if let Err(err) = list.validate() {
            tracing::warn!(
                endpoint = "/shipping/fee",
                error = %err,
                "Shipping fee response failed validation"
            );
            return Err(NhanhError::InvalidResponse(format!("shipping fee: {err}")));
        }
        Ok(list.fees())
    }

    /// Drop cached carriers and every location list fetched through this
    /// service, whatever its level and parent.
    pub fn forget(&self) {
        self.cache.forget(CARRIERS_KEY);
        let keys = std::mem::take(&mut *self.location_keys.lock());
        for key in keys {
            self.cache.forget(&key);
        }
    }
}

fn location_key(location_type: LocationType, parent_id: Option<i64>) -> String {
    format!("shipping.locations.{location_type}.{}", parent_id.unwrap_or(0))
}
