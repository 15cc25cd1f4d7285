//! OAuth access token.

use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::entity::{Attributes, attribute_entity};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Token issued by the access-code exchange.
#[derive(Debug, Clone, Default)]
pub struct AccessToken {
    attributes: Attributes,
}

attribute_entity!(
    AccessToken,
    &[
        ("accessToken", "required|string"),
        ("expiredDateTime", "required|date_format:Y-m-d H:i:s"),
        ("businessId", "required|integer|min:1"),
        ("depotIds", "array"),
        ("permissions", "array"),
    ]
);

impl AccessToken {
    /// Bearer token value.
    #[must_use]
    pub fn token(&self) -> String {
        self.attributes.string("accessToken")
    }

    /// Business the token is scoped to.
    #[must_use]
    pub fn business_id(&self) -> i64 {
        self.attributes.int("businessId")
    }

    /// Expiry in the business's local time.
    #[must_use]
    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        let raw = self.attributes.opt_string("expiredDateTime")?;
        NaiveDateTime::parse_from_str(&raw, DATE_TIME_FORMAT).ok()
    }

    /// Whether the token is expired at `now`, allowing `leeway` early.
    #[must_use]
    pub fn is_expired_at(&self, now: NaiveDateTime, leeway: TimeDelta) -> bool {
        self.expires_at()
            .is_none_or(|expires| now + leeway >= expires)
    }

    /// Depots the token may act on.
    #[must_use]
    pub fn depot_ids(&self) -> Vec<i64> {
        self.attributes
            .list("depotIds")
            .into_iter()
            .filter_map(|value| value.as_i64().or_else(|| value.as_str()?.parse().ok()))
            .collect()
    }

    /// Granted permission codes.
    #[must_use]
    pub fn permissions(&self) -> Vec<String> {
        self.attributes
            .list("permissions")
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect()
    }

    /// Whether a permission code was granted.
    #[must_use]
    pub fn can(&self, permission: &str) -> bool {
        self.permissions().iter().any(|granted| granted == permission)
    }
}
