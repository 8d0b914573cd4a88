use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::forecast::DayForecast;

/// How long a fetched forecast is served from the cache.
pub fn default_cache_ttl() -> Duration {
    Duration::minutes(10)
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Vec<DayForecast>,
    pub fetched_at: DateTime<Utc>,
}

/// Forecasts keyed by city id.
///
/// Entries are never evicted. An entry older than the TTL is treated as
/// absent and replaced by the next `store` for the same city. Concurrent
/// stores for one city are last-write-wins.
#[derive(Debug, Clone)]
pub struct ForecastCache {
    entries: Arc<RwLock<HashMap<u32, CacheEntry>>>,
    ttl: Duration,
}

impl Default for ForecastCache {
    fn default() -> Self {
        ForecastCache::new(default_cache_ttl())
    }
}

impl ForecastCache {
    pub fn new(ttl: Duration) -> ForecastCache {
        ForecastCache {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the cached forecast for `city_id` if it was fetched less than
    /// one TTL before `now`.
    pub async fn get_fresh(&self, city_id: u32, now: DateTime<Utc>) -> Option<Vec<DayForecast>> {
        let entries = self.entries.read().await;
        entries
            .get(&city_id)
            .filter(|entry| now - entry.fetched_at < self.ttl)
            .map(|entry| entry.payload.clone())
    }

    pub async fn store(&self, city_id: u32, payload: Vec<DayForecast>, fetched_at: DateTime<Utc>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            city_id,
            CacheEntry {
                payload,
                fetched_at,
            },
        );
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
