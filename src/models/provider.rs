use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::clock::Clock;
use crate::models::events::{ForecastEvent, ForecastObserver};
use crate::models::forecast::DayForecast;
use crate::models::synthetic::SyntheticForecast;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("no API token configured")]
    MissingToken,
    #[error("request to forecast provider failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },
    #[error("response has no forecast collection")]
    MissingForecast,
    #[error("invalid forecast date '{value}'")]
    InvalidDate { value: String },
}

/// A source of daily forecasts for a city.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_daily(&self, city_name: &str) -> Result<Vec<DayForecast>, UpstreamError>;
}

/// Asks the upstream source for a forecast and substitutes a synthetic one
/// on any failure. Callers never see an error.
pub struct FallbackProvider {
    source: Arc<dyn ForecastSource>,
    synthetic: SyntheticForecast,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn ForecastObserver>,
}

impl FallbackProvider {
    pub fn new(
        source: Arc<dyn ForecastSource>,
        synthetic: SyntheticForecast,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn ForecastObserver>,
    ) -> FallbackProvider {
        FallbackProvider {
            source,
            synthetic,
            clock,
            observer,
        }
    }

    pub async fn forecast(&self, city_name: &str) -> Vec<DayForecast> {
        match self.source.fetch_daily(city_name).await {
            Ok(forecast) => forecast,
            Err(error) => {
                self.observer.observe(ForecastEvent::UpstreamFailure {
                    city_name: city_name.to_string(),
                    reason: error.to_string(),
                });
                self.observer.observe(ForecastEvent::SyntheticFallback {
                    city_name: city_name.to_string(),
                });
                let today = self.clock.now().date_naive();
                self.synthetic.generate(city_name, today)
            }
        }
    }
}


#[cfg(test)]
mod test {
    use super::test_source::FakeSource;
    use super::*;
    use crate::models::clock::test_clock::ManualClock;
    use crate::models::events::test_observer::RecordingObserver;
    use chrono::{TimeZone, Utc};

    fn provider(
        source: Arc<FakeSource>,
        observer: Arc<RecordingObserver>,
    ) -> FallbackProvider {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 10, 20, 8, 0, 0).unwrap());
        FallbackProvider::new(
            source,
            SyntheticForecast::from_seed(3),
            Arc::new(clock),
            observer,
        )
    }

    #[tokio::test]
    async fn upstream_forecast_is_passed_through() {
        let source = Arc::new(FakeSource::succeeding());
        let observer = Arc::new(RecordingObserver::default());
        let forecast = provider(source.clone(), observer.clone())
            .forecast("Moundou")
            .await;

        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast[0].condition.description, "nuageux");
        assert_eq!(source.calls(), 1);
        assert!(observer.events().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_falls_back_to_synthetic_forecast() {
        let source = Arc::new(FakeSource::failing());
        let observer = Arc::new(RecordingObserver::default());
        let forecast = provider(source.clone(), observer.clone())
            .forecast("Bongor")
            .await;

        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast[0].date, "2025-10-20");
        assert_eq!(forecast[0].human_date, "Lundi 20 octobre");
        assert!(forecast.iter().all(|day| day.city_name == "Bongor"));
        assert_eq!(source.calls(), 1);
        assert_eq!(
            observer.events(),
            vec![
                ForecastEvent::UpstreamFailure {
                    city_name: "Bongor".to_string(),
                    reason: "response has no forecast collection".to_string(),
                },
                ForecastEvent::SyntheticFallback {
                    city_name: "Bongor".to_string()
                },
            ]
        );
    }
}
