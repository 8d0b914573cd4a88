use std::sync::Arc;

use crate::models::cache::ForecastCache;
use crate::models::city::{CityRegistry, CitySummary};
use crate::models::clock::Clock;
use crate::models::events::{ForecastEvent, ForecastObserver};
use crate::models::forecast::DayForecast;
use crate::models::provider::FallbackProvider;

#[derive(Debug, PartialEq, Eq)]
pub struct CityNotFound;

/// Serves forecasts for known cities, from the cache while it is fresh and
/// from the provider otherwise.
///
/// Two requests racing on a stale entry may both reach the provider; the
/// last one to finish owns the cache entry.
#[derive(Clone)]
pub struct ForecastService {
    cities: CityRegistry,
    cache: ForecastCache,
    provider: Arc<FallbackProvider>,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn ForecastObserver>,
}

impl ForecastService {
    pub fn new(
        cities: CityRegistry,
        cache: ForecastCache,
        provider: Arc<FallbackProvider>,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn ForecastObserver>,
    ) -> ForecastService {
        ForecastService {
            cities,
            cache,
            provider,
            clock,
            observer,
        }
    }

    pub fn list_cities(&self) -> Vec<CitySummary> {
        self.cities.list_cities()
    }

    pub async fn forecast(&self, city_id: u32) -> Result<Vec<DayForecast>, CityNotFound> {
        let city = self.cities.find_city(city_id).ok_or(CityNotFound)?;
        let now = self.clock.now();

        if let Some(payload) = self.cache.get_fresh(city.id, now).await {
            self.observer
                .observe(ForecastEvent::CacheHit { city_id: city.id });
            return Ok(payload);
        }
        self.observer
            .observe(ForecastEvent::CacheMiss { city_id: city.id });
        log::debug!(
            "Fetching forecast for {} (region {}, upstream region is fixed)",
            city.name,
            city.region_code
        );

        let forecast = self.provider.forecast(city.name).await;
        self.cache.store(city.id, forecast.clone(), now).await;
        Ok(forecast)
    }
}
